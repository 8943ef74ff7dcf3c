use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> Paged<T> {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {code}: {message}")]
    Status { code: u16, message: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("session expired, please sign in again")]
    Unauthorized,
}

impl ApiError {
    /// Whether the stored credentials should be discarded.
    #[must_use]
    pub const fn ends_session(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl ApiError {
    /// Map a non-success HTTP status to an error.
    #[must_use]
    pub fn from_status(code: u16, body: &str) -> Self {
        if code == 401 {
            return Self::Unauthorized;
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.trim().to_string());
        Self::Status { code, message }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Decode a list response body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is not a `Paged<T>` envelope.
pub fn decode_page<T>(body: &str) -> Result<Paged<T>, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Unit {
        id: u64,
        label: String,
    }

    #[test]
    fn decode_page_reads_envelope() {
        let page: Paged<Unit> =
            decode_page(r#"{"data":[{"id":1,"label":"A-101"}],"total":42}"#).expect("valid body");
        assert_eq!(page.total, 42);
        assert_eq!(page.data[0].label, "A-101");
    }

    #[test]
    fn decode_page_rejects_garbage() {
        assert!(matches!(
            decode_page::<Unit>("<html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn status_errors_prefer_server_message() {
        assert_eq!(
            ApiError::from_status(422, r#"{"message":"unit is occupied"}"#),
            ApiError::Status {
                code: 422,
                message: "unit is occupied".into()
            }
        );
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert!(ApiError::from_status(401, "").ends_session());
        let forbidden = ApiError::from_status(403, "no access");
        assert!(!forbidden.ends_session());
        assert_eq!(forbidden.to_string(), "request failed with status 403: no access");
        assert_eq!(
            ApiError::from_status(500, " boom \n").to_string(),
            "request failed with status 500: boom"
        );
    }
}
