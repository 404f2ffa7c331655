/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / plain-text error body)
 * - body 読み込み失敗 / JSON decode 失敗 / serialize 失敗を統一的に変換
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::greeting::DecodeError;

#[derive(Debug, Error)]
pub enum AppError {
    // transport 側の失敗も caller の不正入力と同じ 400 に寄せる
    #[error("failed to read request body: {0}")]
    BodyUnreadable(#[source] axum::Error),

    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] DecodeError),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("failed to serialize response: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BodyUnreadable(_) | AppError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text sent back to the caller. Internal details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::BodyUnreadable(_) => "Failed to read body",
            AppError::InvalidJson(_) => "Invalid JSON",
            AppError::MethodNotAllowed => "Method not allowed",
            AppError::Serialization(_) => "Failed to encode response",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.public_message()).into_response()
    }
}
