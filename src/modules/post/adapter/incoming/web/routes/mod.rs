pub mod create_post;
pub mod delete_post;
pub mod get_posts;
pub mod get_single_post;
pub mod update_post;

pub use create_post::{create_post_handler, PostRequest};
pub use delete_post::delete_post_handler;
pub use get_posts::get_posts_handler;
pub use get_single_post::get_single_post_handler;
pub use update_post::{patch_post_handler, put_post_handler};
