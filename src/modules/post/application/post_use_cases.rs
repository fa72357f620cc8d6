use std::sync::Arc;

use crate::modules::post::application::ports::incoming::use_cases::{
    CreatePostUseCase, DeletePostUseCase, GetPostsUseCase, GetSinglePostUseCase,
    UpdatePostUseCase,
};

#[derive(Clone)]
pub struct PostUseCases {
    pub create: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetPostsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSinglePostUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePostUseCase + Send + Sync>,
}
