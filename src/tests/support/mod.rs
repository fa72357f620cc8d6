pub mod app_state_builder;
pub mod fakes;

use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::TokenProvider;
use fakes::StubTokenProvider;

/// `TokenProvider` app data as the auth extractor expects it.
pub fn stub_token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StubTokenProvider);
    web::Data::new(provider)
}
