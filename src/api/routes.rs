/*
 * Responsibility
 * - URL 構造を定義
 * - /greet 配下は method を問わず greet handler へ (method dispatch は handler 側)
 */
use axum::{Router, routing::any};

use crate::state::AppState;

use crate::api::handlers::greet::greet;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/greet", any(greet))
        // catch-all は空 segment にマッチしないので末尾 `/` は別途登録
        .route("/greet/", any(greet))
        .route("/greet/{*from}", any(greet))
}
