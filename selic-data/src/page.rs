use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::FetchError;

/// Where the rate page comes from.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Location used in logs and error messages.
    fn url(&self) -> &str;

    /// Full HTML body of the page.
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// One plain GET with default headers and a bounded timeout. No retries.
pub struct HttpPageSource {
    client: reqwest::Client,
    url: String,
}

impl HttpPageSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        Ok(Self { client, url })
    }

    fn request_error(&self, source: reqwest::Error) -> FetchError {
        FetchError::Request {
            url: self.url.clone(),
            source,
        }
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| self.request_error(e))?;
        debug!(status = %response.status(), "page response received");

        let body = response.text().await.map_err(|e| self.request_error(e))?;
        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody {
                url: self.url.clone(),
            });
        }

        Ok(body)
    }
}
