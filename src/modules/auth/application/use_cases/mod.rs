pub mod check_availability;
pub mod create_user;
pub mod delete_user;
pub mod fetch_profile;
pub mod login_user;
pub mod refresh_token;
pub mod update_profile;
