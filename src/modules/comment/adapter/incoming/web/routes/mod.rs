pub mod create_comment;
pub mod delete_comment;
pub mod get_comments;
pub mod get_single_comment;
pub mod update_comment;

pub use create_comment::{create_comment_handler, CommentRequest};
pub use delete_comment::delete_comment_handler;
pub use get_comments::get_comments_handler;
pub use get_single_comment::get_single_comment_handler;
pub use update_comment::{patch_comment_handler, put_comment_handler};
