use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};

// ========================= Refresh Token Request =========================
/// Validated refresh token request
#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String, // Private - guaranteed non-empty
}

#[derive(Debug, Clone)]
pub enum RefreshTokenRequestError {
    EmptyToken,
}

impl std::fmt::Display for RefreshTokenRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenRequestError::EmptyToken => write!(f, "Refresh token cannot be empty"),
        }
    }
}

impl std::error::Error for RefreshTokenRequestError {}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        if refresh_token.trim().is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }

        Ok(Self {
            refresh_token: refresh_token.trim().to_string(),
        })
    }

    /// Get refresh token (guaranteed to be non-empty)
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

// Body is `{"refresh": "<token>"}`
impl<'de> Deserialize<'de> for RefreshTokenRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RefreshTokenRequestHelper {
            refresh: String,
        }

        let helper = RefreshTokenRequestHelper::deserialize(deserializer)?;
        RefreshTokenRequest::new(helper.refresh).map_err(serde::de::Error::custom)
    }
}

// ====================== Refresh Token Error =============================
#[derive(Debug, Clone)]
pub enum RefreshTokenError {
    TokenExpired,
    TokenInvalid,
    TokenNotYetValid,
    InvalidTokenType,
    InvalidSignature,
    TokenGenerationFailed(String),
}

impl std::fmt::Display for RefreshTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenError::TokenExpired => write!(f, "Refresh token has expired"),
            RefreshTokenError::TokenInvalid => write!(f, "Invalid refresh token"),
            RefreshTokenError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            RefreshTokenError::InvalidTokenType => write!(f, "Invalid token type"),
            RefreshTokenError::InvalidSignature => write!(f, "Invalid token signature"),
            RefreshTokenError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for RefreshTokenError {}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::TokenNotYetValid => RefreshTokenError::TokenNotYetValid,
            TokenError::InvalidTokenType(_) => RefreshTokenError::InvalidTokenType,
            TokenError::InvalidSignature => RefreshTokenError::InvalidSignature,
            TokenError::MalformedToken => RefreshTokenError::TokenInvalid,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
        }
    }
}

// ============================ Refresh Token Response =========================
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct RefreshTokenResponse {
    pub access: String,
    /// Present only when refresh-token rotation is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

// ============================ Refresh Token Use Case =============================
#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

#[derive(Clone)]
pub struct RefreshTokenUseCase {
    token_provider: Arc<dyn TokenProvider>,
    enable_token_rotation: bool,
}

impl RefreshTokenUseCase {
    pub fn new(token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            token_provider,
            enable_token_rotation: false,
        }
    }

    pub fn with_token_rotation(mut self, enable: bool) -> Self {
        self.enable_token_rotation = enable;
        self
    }
}

#[async_trait]
impl IRefreshTokenUseCase for RefreshTokenUseCase {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let claims = self
            .token_provider
            .verify_token(request.refresh_token())
            .map_err(RefreshTokenError::from)?;

        if claims.token_type != "refresh" {
            return Err(RefreshTokenError::InvalidTokenType);
        }

        let access = self
            .token_provider
            .generate_access_token(claims.sub)
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;

        let refresh = if self.enable_token_rotation {
            Some(
                self.token_provider
                    .generate_refresh_token(claims.sub)
                    .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?,
            )
        } else {
            None
        };

        Ok(RefreshTokenResponse { access, refresh })
    }
}
