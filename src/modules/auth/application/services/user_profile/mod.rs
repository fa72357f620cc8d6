pub mod delete_user;
pub mod fetch_user;
pub mod update_profile;

pub use delete_user::DeleteUserService;
pub use fetch_user::{FetchUserProfileService, ListUsersService};
pub use update_profile::UpdateUserProfileService;
