// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::shared::validation::FieldErrors;

/// Error envelope. Successful responses carry the resource itself.
#[derive(Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub error: ApiError,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl ApiResponse {
    pub fn ok<T: Serialize>(body: &T) -> HttpResponse {
        HttpResponse::Ok().json(body)
    }

    pub fn created<T: Serialize>(body: &T) -> HttpResponse {
        HttpResponse::Created().json(body)
    }

    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: false,
            error: ApiError {
                code: code.to_string(),
                message: message.to_string(),
                fields: None,
            },
        })
    }

    /// 400 with per-field messages, e.g. `{"email": ["Enter a valid email address."]}`.
    pub fn validation_error(fields: FieldErrors) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiResponse {
            success: false,
            error: ApiError {
                code: "VALIDATION_ERROR".to_string(),
                message: "Invalid input".to_string(),
                fields: Some(fields),
            },
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
