//! REST client for list endpoints.

use crate::paths;
use estatedesk_grid::{ListQuery, RowId};
#[cfg(target_arch = "wasm32")]
use estatedesk_grid::{ApiError, Paged, decode_page};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(paths::api_base_url())
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn list_url(&self, resource: &str, query: &ListQuery) -> String {
        format!(
            "{}?{}",
            paths::join(&self.base_url, resource),
            query.to_query_string()
        )
    }

    /// The id is percent-encoded as a single path segment.
    #[must_use]
    pub fn item_url(&self, resource: &str, id: &RowId) -> String {
        paths::join(
            &paths::join(&self.base_url, resource),
            &urlencoding::encode(id.as_str()),
        )
    }
}

#[cfg(target_arch = "wasm32")]
impl ApiClient {
    /// Fetch one page of `resource`.
    ///
    /// # Errors
    /// Returns [`ApiError`] on network failure, a non-2xx status, or a body
    /// that is not a list envelope.
    #[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
    pub async fn list<T>(
        &self,
        resource: &str,
        query: &ListQuery,
        token: Option<&str>,
    ) -> Result<Paged<T>, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.list_url(resource, query);
        let body = send("GET", &url, token).await?;
        decode_page(&body)
    }

    /// # Errors
    /// Returns [`ApiError`] on network failure or a non-2xx status.
    #[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
    pub async fn delete(
        &self,
        resource: &str,
        id: &RowId,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        let url = self.item_url(resource, id);
        send("DELETE", &url, token).await.map(|_| ())
    }
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)]
async fn send(method: &str, url: &str, token: Option<&str>) -> Result<String, ApiError> {
    let (status, body) = crate::dom::fetch_text(method, url, token)
        .await
        .map_err(|err| ApiError::Network(crate::dom::js_error_message(&err)))?;
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        log::warn!("{method} {url} failed with {status}");
        Err(ApiError::from_status(status, &body))
    }
}
