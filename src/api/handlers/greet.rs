/*
 * Responsibility
 * - /greet 系 handler (GET / POST / それ以外は 405)
 * - POST のみ body を読み decode → RequestContext に user を足して composer へ渡す
 * - 観測 (ログ) は AppState の observer 経由で、受信 / エラー / 応答送信の 3 点のみ
 */
use axum::{
    body::{Body, to_bytes},
    extract::State,
    http::{Method, Uri, header},
    response::{IntoResponse, Response},
};

use crate::{
    api::extractors::RequestContext,
    error::AppError,
    services::greeting::{self, Greeting},
    state::AppState,
};

pub async fn greet(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    ctx: RequestContext,
    body: Body,
) -> Response {
    state
        .observer
        .request_received(&method, &uri, !ctx.token.is_empty());

    let res = match respond(&state, &method, ctx, body).await {
        Ok(res) => res,
        Err(err) => {
            state.observer.error_detected(&method, &uri, &err);
            err.into_response()
        }
    };

    state.observer.response_sent(&method, &uri, res.status());
    res
}

async fn respond(
    state: &AppState,
    method: &Method,
    ctx: RequestContext,
    body: Body,
) -> Result<Response, AppError> {
    let ctx = if method == Method::GET {
        ctx
    } else if method == Method::POST {
        let bytes = to_bytes(body, state.body_limit_bytes)
            .await
            .map_err(AppError::BodyUnreadable)?;
        let user = greeting::decode_user_details(&bytes)?;
        ctx.with_user(user)
    } else {
        return Err(AppError::MethodNotAllowed);
    };

    render(greeting::compose(state.response_mode, ctx))
}

// body は全て組み立ててから返す (エラー時に途中まで書かれた body は存在しない)
fn render(greeting: Greeting) -> Result<Response, AppError> {
    match greeting {
        Greeting::Plain(text) => Ok(text.into_response()),
        Greeting::Structured(payload) => {
            let bytes = serde_json::to_vec(&payload).map_err(AppError::Serialization)?;
            Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
        }
    }
}
