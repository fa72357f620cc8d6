pub mod post_query;
pub mod post_repository;

pub use post_query::{PostQuery, PostQueryError, PostView};
pub use post_repository::{
    CreatePostData, PostRecord, PostRepository, PostRepositoryError, UpdatePostData,
};
