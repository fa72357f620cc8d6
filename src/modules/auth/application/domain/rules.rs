use std::sync::OnceLock;

use email_address::EmailAddress;
use regex::Regex;

use super::entities::Gender;
use crate::shared::validation::{required_text, FieldErrors, BLANK, REQUIRED};

pub const USERNAME_MAX_LEN: usize = 150;
pub const NAME_MAX_LEN: usize = 150;
pub const CITY_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 254;

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.@+-]+$").expect("username pattern is valid"))
}

pub fn check_username(errors: &mut FieldErrors, value: Option<&str>) -> Option<String> {
    let username = required_text(errors, "username", value, Some(USERNAME_MAX_LEN))?;

    if !username_pattern().is_match(&username) {
        errors.add(
            "username",
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
        );
        return None;
    }

    Some(username)
}

/// Valid addresses come back lower-cased.
pub fn check_email(errors: &mut FieldErrors, value: Option<&str>) -> Option<String> {
    let email = required_text(errors, "email", value, Some(EMAIL_MAX_LEN))?;

    if !EmailAddress::is_valid(&email) {
        errors.add("email", "Enter a valid email address.");
        return None;
    }

    Some(email.to_lowercase())
}

pub fn check_gender(errors: &mut FieldErrors, value: Option<&str>) -> Option<Gender> {
    let code = required_text(errors, "gender", value, None)?;

    match Gender::from_code(&code) {
        Some(gender) => Some(gender),
        None => {
            errors.add("gender", format!("\"{}\" is not a valid choice.", code));
            None
        }
    }
}

/// `age` must be present and positive at registration.
pub fn check_required_age(errors: &mut FieldErrors, value: Option<i32>) -> Option<i32> {
    match value {
        None | Some(0) => {
            errors.add("age", REQUIRED);
            None
        }
        Some(age) if age < 0 => {
            errors.add("age", "Ensure this value is greater than or equal to 0.");
            None
        }
        Some(age) => Some(age),
    }
}

pub fn check_age(errors: &mut FieldErrors, age: i32) -> Option<i32> {
    if age < 0 {
        errors.add("age", "Ensure this value is greater than or equal to 0.");
        return None;
    }
    Some(age)
}

pub fn check_city(errors: &mut FieldErrors, value: &str) -> Option<String> {
    let city = value.trim();
    if city.is_empty() {
        errors.add("city", BLANK);
        return None;
    }
    if city.chars().count() > CITY_MAX_LEN {
        errors.add(
            "city",
            format!(
                "Ensure this field has no more than {} characters.",
                CITY_MAX_LEN
            ),
        );
        return None;
    }
    Some(city.to_string())
}
