mod request_ctx;

pub use request_ctx::{QueryParams, RequestContext};
