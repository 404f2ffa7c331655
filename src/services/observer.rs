/*
 * Responsibility
 * - リクエスト処理の観測ポイント (受信 / エラー検出 / 応答送信) を trait として定義
 * - handler はここを経由してのみログを出す (tracing を直接呼ばない)
 */
use axum::http::{Method, StatusCode, Uri};

use crate::error::AppError;

/// Hooks the greet handler calls at fixed points of every request.
///
/// Implementations must be cheap and must not fail; they are shared across
/// concurrent requests through `AppState`.
pub trait RequestObserver: Send + Sync {
    /// `has_token` tells whether a non-empty bearer token was supplied; the token itself
    /// is never handed to the observer.
    fn request_received(&self, method: &Method, uri: &Uri, has_token: bool);

    fn error_detected(&self, method: &Method, uri: &Uri, err: &AppError);

    fn response_sent(&self, method: &Method, uri: &Uri, status: StatusCode);
}

/// Production observer: emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn request_received(&self, method: &Method, uri: &Uri, has_token: bool) {
        tracing::info!(
            %method,
            path = uri.path(),
            query = uri.query(),
            has_token,
            "greet request received"
        );
    }

    fn error_detected(&self, method: &Method, uri: &Uri, err: &AppError) {
        let status = err.status();
        if status.is_server_error() {
            tracing::error!(%method, path = uri.path(), %status, error = ?err, "greet request failed");
        } else {
            tracing::warn!(%method, path = uri.path(), %status, error = %err, "greet request rejected");
        }
    }

    fn response_sent(&self, method: &Method, uri: &Uri, status: StatusCode) {
        tracing::info!(%method, path = uri.path(), %status, "greet response sent");
    }
}
