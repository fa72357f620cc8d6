use crate::shared::patch::UpdateMode;
use crate::shared::validation::{required_text, FieldErrors};

pub const TITLE_MAX_LEN: usize = 200;

/// Validated post fields; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFields {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Checks a post form. Creation and PUT require both fields, PATCH only
/// checks the fields it carries.
pub fn check_post_fields(
    mode: UpdateMode,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<PostFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = match (mode, title) {
        (UpdateMode::Partial, None) => None,
        (_, raw) => required_text(&mut errors, "title", raw, Some(TITLE_MAX_LEN)),
    };

    let content = match (mode, content) {
        (UpdateMode::Partial, None) => None,
        (_, raw) => required_text(&mut errors, "content", raw, None),
    };

    errors.into_result()?;

    Ok(PostFields { title, content })
}
