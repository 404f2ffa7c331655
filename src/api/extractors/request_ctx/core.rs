use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use percent_encoding::percent_decode_str;

use super::{QueryParams, RequestContext};

/// Prefix stripped from the request path to obtain the `from` segment.
pub const GREET_PREFIX: &str = "/greet/";

const BEARER_PREFIX: &str = "Bearer ";

/// Returns the credential after a case-sensitive `"Bearer "` prefix, or `""`.
pub fn bearer_token(header_value: &str) -> &str {
    header_value.strip_prefix(BEARER_PREFIX).unwrap_or("")
}

/// Strips `prefix` from `path` if present; otherwise returns `path` unchanged.
pub fn path_param<'a>(path: &'a str, prefix: &str) -> &'a str {
    path.strip_prefix(prefix).unwrap_or(path)
}

/// Form-urlencoded decoding of the raw query, keeping every value of a repeated key.
pub fn query_params(raw: Option<&str>) -> QueryParams {
    raw.map(|q| {
        url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect()
    })
    .unwrap_or_default()
}

/// Percent-decoded request path; invalid UTF-8 becomes U+FFFD.
pub fn decoded_path(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Handler で RequestContext を受け取るための extractor
/// 失敗しない (token が無い/不正なら空文字)。user は handler 側で body decode 後に入れる
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // obs-text (0x80 以上) を含む値も捨てずに lossy で通す
        let authorization = parts
            .headers
            .get(header::AUTHORIZATION)
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
            .unwrap_or_default();

        let path = decoded_path(parts.uri.path());

        Ok(RequestContext {
            path_param: path_param(&path, GREET_PREFIX).to_string(),
            query: query_params(parts.uri.query()),
            token: bearer_token(&authorization).to_string(),
            user: None,
        })
    }
}
