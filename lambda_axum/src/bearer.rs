use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header};

const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the token of an `Authorization: Bearer <token>` header, if any.
///
/// Never rejects: a missing header, a header that is not visible ASCII,
/// any other auth scheme, or an empty token all yield `None` and leave the
/// decision to the handler.
#[derive(Debug, Clone)]
pub struct OptionalBearerToken(pub Option<String>);

impl<S> FromRequestParts<S> for OptionalBearerToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(bearer_token(&parts.headers).map(str::to_string)))
    }
}

/// Returns the token carried by the `Authorization` header when it uses
/// the `Bearer` scheme.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    match value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.is_empty() => Some(token),
        Some(_) => None,
        None => {
            tracing::debug!("ignoring non-bearer authorization scheme");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Request};

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_bearer_token_strips_prefix() {
        assert_eq!(bearer_token(&headers_with("Bearer tok")), Some("tok"));
    }

    #[test]
    fn test_bearer_token_keeps_token_verbatim() {
        assert_eq!(
            bearer_token(&headers_with("Bearer a.b c")),
            Some("a.b c")
        );
    }

    #[test]
    fn test_bearer_token_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes() {
        assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers_with("tok")), None);
        assert_eq!(bearer_token(&headers_with("bearer tok")), None);
    }

    #[test]
    fn test_bearer_token_rejects_empty_token() {
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
    }

    #[tokio::test]
    async fn test_extractor_never_rejects() {
        let request = Request::builder()
            .header("authorization", "Bearer tok")
            .body(())
            .unwrap();
        let (mut parts, ()) = request.into_parts();

        let OptionalBearerToken(token) =
            OptionalBearerToken::from_request_parts(&mut parts, &())
                .await
                .unwrap();
        assert_eq!(token.as_deref(), Some("tok"));

        let (mut parts, ()) = Request::new(()).into_parts();
        let OptionalBearerToken(token) =
            OptionalBearerToken::from_request_parts(&mut parts, &())
                .await
                .unwrap();
        assert!(token.is_none());
    }
}
