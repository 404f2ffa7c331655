/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - response_mode, body 上限, observer
 * - Clone 前提で持つ (内部は Arc/Copy で cheap)
 * - リクエスト間で共有する可変状態は持たない
 */
use std::sync::Arc;

use crate::config::Config;
use crate::services::greeting::ResponseMode;
use crate::services::observer::RequestObserver;

#[derive(Clone)]
pub struct AppState {
    pub response_mode: ResponseMode,
    pub body_limit_bytes: usize,
    pub observer: Arc<dyn RequestObserver>,
}

impl AppState {
    pub fn new(config: &Config, observer: Arc<dyn RequestObserver>) -> Self {
        Self {
            response_mode: config.response_mode,
            body_limit_bytes: config.body_limit_bytes,
            observer,
        }
    }
}
