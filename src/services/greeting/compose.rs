use std::str::FromStr;

use thiserror::Error;

use crate::api::dto::greet::{GreetResponse, UserDetails};
use crate::api::extractors::RequestContext;

/// Shape of a successful greet response. Chosen once at startup, never per request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseMode {
    /// A single sentence with the request metadata inlined.
    Plain,
    /// A JSON object (`message`, `from`, `query`, `token`, optional `user`).
    #[default]
    Structured,
}

#[derive(Debug, Error)]
#[error("unknown response mode: {0}")]
pub struct UnknownResponseMode(String);

impl FromStr for ResponseMode {
    type Err = UnknownResponseMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" | "structured" => Ok(Self::Structured),
            _ => Err(UnknownResponseMode(s.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Greeting {
    Plain(String),
    Structured(GreetResponse),
}

/// Builds the success payload for a request.
///
/// `ctx.user` is set only for a POST whose body decoded, so it alone decides
/// between the GET greeting and the personalised one.
pub fn compose(mode: ResponseMode, ctx: RequestContext) -> Greeting {
    match mode {
        ResponseMode::Plain => Greeting::Plain(plain_sentence(&ctx)),
        ResponseMode::Structured => Greeting::Structured(GreetResponse {
            message: message(ctx.user.as_ref()),
            from: ctx.path_param,
            query: ctx.query,
            token: ctx.token,
            user: ctx.user,
        }),
    }
}

fn message(user: Option<&UserDetails>) -> String {
    match user {
        Some(user) => format!("Hello, {}! I heard you like {}.", user.name, user.hobby),
        None => "Hello from GET!".to_string(),
    }
}

fn plain_sentence(ctx: &RequestContext) -> String {
    format!(
        "{} From: {}. Query: {}. Token: {}",
        message(ctx.user.as_ref()),
        ctx.path_param,
        ctx.query,
        ctx.token
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::extractors::QueryParams;

    fn ctx(user: Option<UserDetails>) -> RequestContext {
        RequestContext {
            path_param: "alice".into(),
            query: QueryParams::from_iter([
                ("x".to_string(), "1".to_string()),
                ("x".to_string(), "2".to_string()),
            ]),
            token: "tok1".into(),
            user,
        }
    }

    fn bob() -> UserDetails {
        UserDetails {
            name: "Bob".into(),
            hobby: "chess".into(),
        }
    }

    #[test]
    fn parses_modes() {
        assert_eq!("plain".parse::<ResponseMode>().unwrap(), ResponseMode::Plain);
        assert_eq!(" TEXT ".parse::<ResponseMode>().unwrap(), ResponseMode::Plain);
        assert_eq!("json".parse::<ResponseMode>().unwrap(), ResponseMode::Structured);
        assert_eq!(
            "structured".parse::<ResponseMode>().unwrap(),
            ResponseMode::Structured
        );
        assert!("yaml".parse::<ResponseMode>().is_err());
    }

    #[test]
    fn plain_get_inlines_metadata() {
        let greeting = compose(ResponseMode::Plain, ctx(None));
        assert_eq!(
            greeting,
            Greeting::Plain(
                "Hello from GET! From: alice. Query: map[x:[1 2]]. Token: tok1".to_string()
            )
        );
    }

    #[test]
    fn plain_post_interpolates_user() {
        let greeting = compose(ResponseMode::Plain, ctx(Some(bob())));
        assert_eq!(
            greeting,
            Greeting::Plain(
                "Hello, Bob! I heard you like chess. From: alice. Query: map[x:[1 2]]. Token: tok1"
                    .to_string()
            )
        );
    }

    #[test]
    fn structured_get_has_no_user() {
        let Greeting::Structured(res) = compose(ResponseMode::Structured, ctx(None)) else {
            panic!("expected structured greeting");
        };
        assert_eq!(res.message, "Hello from GET!");
        assert_eq!(res.from, "alice");
        assert_eq!(res.token, "tok1");
        assert_eq!(res.query.get("x"), Some(&["1".to_string(), "2".to_string()][..]));
        assert!(res.user.is_none());
    }

    #[test]
    fn structured_post_carries_user() {
        let Greeting::Structured(res) = compose(ResponseMode::Structured, ctx(Some(bob()))) else {
            panic!("expected structured greeting");
        };
        assert!(res.message.contains("Bob"));
        assert!(res.message.contains("chess"));
        assert_eq!(res.user, Some(bob()));
    }
}
