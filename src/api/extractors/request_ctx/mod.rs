/*!
 * Request context extractor
 *
 * Responsibility:
 * - greet handler に RequestContext (path param / query / bearer token) を提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - RequestContext
 * - QueryParams
 */

mod core;
mod types;

pub use types::{QueryParams, RequestContext};
