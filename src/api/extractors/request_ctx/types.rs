/*
 * Responsibility
 * - Handler から見える「リクエスト由来のコンテキスト」の型
 * - extractor が組み立て、handler が body decode 結果 (user) を足して composer へ渡す
 *
 * Notes
 * - token は echo するだけで検証はしない (認可判断には使わない)
 */
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::api::dto::greet::UserDetails;

/// Query parameters keyed by name. A key may repeat; values keep request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, Vec<String>>);

impl QueryParams {
    pub fn push(&mut self, key: String, value: String) {
        self.0.entry(key).or_default().push(value);
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut params = Self::default();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

/// Renders as `map[k1:[v1 v2] k2:[v3]]` with keys sorted; this is the form the
/// plain-text greeting inlines.
impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("map[")?;
        for (i, (key, values)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:[{}]", key, values.join(" "))?;
        }
        f.write_str("]")
    }
}

/// Per-request data the greeting is composed from. Dropped once the response is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub path_param: String,
    pub query: QueryParams,
    pub token: String,
    pub user: Option<UserDetails>,
}

impl RequestContext {
    pub fn with_user(self, user: UserDetails) -> Self {
        Self {
            user: Some(user),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_map_form() {
        assert_eq!(QueryParams::default().to_string(), "map[]");

        let params = QueryParams::from_iter([
            ("b".to_string(), "3".to_string()),
            ("a".to_string(), "1".to_string()),
            ("a".to_string(), "2".to_string()),
        ]);
        assert_eq!(params.to_string(), "map[a:[1 2] b:[3]]");
    }

    #[test]
    fn repeated_keys_keep_order() {
        let params = QueryParams::from_iter([
            ("x".to_string(), "2".to_string()),
            ("x".to_string(), "1".to_string()),
        ]);
        assert_eq!(params.get("x"), Some(&["2".to_string(), "1".to_string()][..]));
    }
}
