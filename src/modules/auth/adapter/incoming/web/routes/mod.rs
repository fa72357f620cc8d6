pub mod check_availability;
pub mod delete_user;
pub mod fetch_user;
pub mod login_user;
pub mod refresh_token;
pub mod register_user;
pub mod update_profile;

pub use check_availability::{
    check_email_handler, check_username_handler, AvailabilityResponse, EmailQuery, UsernameQuery,
};
pub use delete_user::delete_user_handler;
pub use fetch_user::{get_own_profile_handler, get_user_handler, list_users_handler};
pub use login_user::{login_user_handler, LoginRequestDto};
pub use refresh_token::{refresh_token_handler, RefreshTokenRequestDto};
pub use register_user::register_user_handler;
pub use update_profile::{patch_user_handler, put_user_handler, UpdateUserRequest};
