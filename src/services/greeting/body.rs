use serde_json::{Map, Value};
use thiserror::Error;

use crate::api::dto::greet::UserDetails;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("unexpected field value: {0}")]
    Field(#[source] serde_json::Error),
}

/// Decodes a POST body into [`UserDetails`].
///
/// Only a top-level JSON object is accepted. Missing or `null` fields become empty
/// strings and unknown fields are ignored, so `{}` is a valid body. Field names
/// match without regard to ASCII case; an exact match wins over a folded one.
pub fn decode_user_details(bytes: &[u8]) -> Result<UserDetails, DecodeError> {
    // struct は JSON array からも deserialize できてしまうので、先に Value で型を確認する
    let value: Value = serde_json::from_slice(bytes).map_err(DecodeError::Syntax)?;

    match value {
        Value::Object(map) => serde_json::from_value(Value::Object(known_fields(map)))
            .map_err(DecodeError::Field),
        other => Err(DecodeError::NotAnObject(json_kind(&other))),
    }
}

const FIELDS: [&str; 2] = ["name", "hobby"];

// `"Name"` や `"HOBBY"` も name / hobby として受け付ける
fn known_fields(mut map: Map<String, Value>) -> Map<String, Value> {
    FIELDS
        .iter()
        .filter_map(|field| {
            let key = if map.contains_key(*field) {
                field.to_string()
            } else {
                map.keys().find(|k| k.eq_ignore_ascii_case(field))?.clone()
            };
            map.remove(&key).map(|v| (field.to_string(), v))
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_name_and_hobby() {
        let user = decode_user_details(br#"{"name":"Bob","hobby":"chess"}"#).unwrap();
        assert_eq!(
            user,
            UserDetails {
                name: "Bob".into(),
                hobby: "chess".into(),
            }
        );
    }

    #[test]
    fn empty_object_yields_empty_fields() {
        let user = decode_user_details(b"{}").unwrap();
        assert_eq!(user, UserDetails::default());
    }

    #[test]
    fn unknown_fields_are_ignored_and_null_is_empty() {
        let user = decode_user_details(br#"{"name":null,"hobby":"go","age":42}"#).unwrap();
        assert_eq!(user.name, "");
        assert_eq!(user.hobby, "go");
    }

    #[test]
    fn field_names_match_case_insensitively() {
        let user = decode_user_details(br#"{"Name":"Bob","HOBBY":"chess"}"#).unwrap();
        assert_eq!(user.name, "Bob");
        assert_eq!(user.hobby, "chess");
    }

    #[test]
    fn exact_field_name_wins_over_folded_one() {
        let user = decode_user_details(br#"{"NAME":"loud","name":"quiet"}"#).unwrap();
        assert_eq!(user.name, "quiet");
        assert_eq!(user.hobby, "");
    }

    #[test]
    fn encoded_details_decode_back_to_the_same_record() {
        let user = UserDetails {
            name: "Bob".into(),
            hobby: "chess".into(),
        };
        let bytes = serde_json::to_vec(&user).unwrap();
        assert_eq!(decode_user_details(&bytes).unwrap(), user);
    }

    #[test]
    fn empty_and_truncated_bodies_are_syntax_errors() {
        assert!(matches!(
            decode_user_details(b""),
            Err(DecodeError::Syntax(_))
        ));
        assert!(matches!(
            decode_user_details(b"{"),
            Err(DecodeError::Syntax(_))
        ));
        assert!(matches!(
            decode_user_details(b"not json"),
            Err(DecodeError::Syntax(_))
        ));
        assert!(matches!(
            decode_user_details(br#"{"name":"a"} trailing"#),
            Err(DecodeError::Syntax(_))
        ));
    }

    #[test]
    fn non_object_top_level_is_rejected() {
        assert!(matches!(
            decode_user_details(br#"["Bob","chess"]"#),
            Err(DecodeError::NotAnObject("array"))
        ));
        assert!(matches!(
            decode_user_details(b"null"),
            Err(DecodeError::NotAnObject("null"))
        ));
        assert!(matches!(
            decode_user_details(br#""Bob""#),
            Err(DecodeError::NotAnObject("string"))
        ));
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        assert!(matches!(
            decode_user_details(br#"{"name":7}"#),
            Err(DecodeError::Field(_))
        ));
    }
}
