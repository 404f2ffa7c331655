/*
 * Responsibility
 * - greet の body decode と response 組み立てを束ねる
 * - HTTP / axum には依存しない (handler 側で Response に変換)
 */
mod body;
mod compose;

pub use body::{DecodeError, decode_user_details};
pub use compose::{Greeting, ResponseMode, UnknownResponseMode, compose};
