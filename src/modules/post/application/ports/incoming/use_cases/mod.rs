mod create_post;
mod delete_post;
mod get_posts;
mod get_single_post;
mod update_post;

pub use create_post::{CreatePostError, CreatePostUseCase, PostInput};
pub use delete_post::{DeletePostError, DeletePostUseCase};
pub use get_posts::{GetPostsError, GetPostsUseCase};
pub use get_single_post::{GetSinglePostError, GetSinglePostUseCase};
pub use update_post::{UpdatePostError, UpdatePostUseCase};
