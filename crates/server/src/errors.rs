use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Body of every non-2xx response that carries text.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(reason) => ApiError::BadRequest(reason.to_string()),
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

// 请求体不可读（类型错误、缺少 content-type、非 JSON）一律按 400 处理
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorMessage { message })).into_response()
            }
            // 404 不带响应体
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal(message) => {
                error!(error = %message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorMessage { message })).into_response()
            }
        }
    }
}
