/*
 * Responsibility
 * - greet の request/response DTO
 * - UserDetails は POST body の decode 結果、GreetResponse は structured mode の応答
 */
use serde::{Deserialize, Deserializer, Serialize};

use crate::api::extractors::QueryParams;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hobby: String,
}

// `"name": null` は欠落と同じ扱い (空文字)
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GreetResponse {
    pub message: String,
    /// Trailing path segment after `/greet/`.
    pub from: String,
    pub query: QueryParams,
    pub token: String,

    /// Present only for a POST whose body decoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDetails>,
}
