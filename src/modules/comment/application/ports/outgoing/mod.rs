pub mod comment_query;
pub mod comment_repository;

pub use comment_query::{CommentQuery, CommentQueryError, CommentView};
pub use comment_repository::{
    CommentRecord, CommentRepository, CommentRepositoryError, CreateCommentData,
};
