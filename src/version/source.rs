//! Sources for the release directory index page

#[cfg(test)]
use mockall::automock;

use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::config::USER_AGENT;
use crate::version::error::FetchError;

/// Trait for fetching the raw directory index text
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait IndexSource: Send + Sync {
    /// Location the index is fetched from, used in log messages
    fn location(&self) -> String;

    /// Fetches the full index body
    ///
    /// # Returns
    /// * `Ok(String)` - The response body as text
    /// * `Err(FetchError)` - On transport failure or any status other than 200
    async fn fetch_index(&self) -> Result<String, FetchError>;
}

/// Index served over HTTP(S), e.g. `https://www.python.org/ftp/python/`
pub struct HttpIndexSource {
    client: Client,
    url: String,
}

impl HttpIndexSource {
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl IndexSource for HttpIndexSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch_index(&self) -> Result<String, FetchError> {
        debug!("Fetching index: {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Index returned status {}: {}", status, self.url);
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await.map_err(|e| {
            warn!("Failed to read index response: {}", e);
            FetchError::Body(e.to_string())
        })?;

        info!("Fetched {} bytes from {}", body.len(), self.url);

        Ok(body)
    }
}
