use std::sync::Arc;

use crate::modules::comment::application::ports::incoming::use_cases::{
    CreateCommentUseCase, DeleteCommentUseCase, GetCommentsUseCase, GetSingleCommentUseCase,
    UpdateCommentUseCase,
};

#[derive(Clone)]
pub struct CommentUseCases {
    pub create: Arc<dyn CreateCommentUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetCommentsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleCommentUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCommentUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCommentUseCase + Send + Sync>,
}
