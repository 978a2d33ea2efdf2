//! Page fetching for webchurn.
//!
//! One client, one GET per churn. The body comes back as text and goes
//! straight to the extraction engine; status handling stays here.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument, warn};

use webchurn_shared::{FetchConfig, Result, WebchurnError};

/// HTTP client for retrieving pages to churn.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher from the `[fetch]` configuration.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(config.redirect_limit))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WebchurnError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetch `url` and return the response body as text.
    ///
    /// Non-success statuses still yield their body; the extraction layer
    /// decides what to make of whatever came back.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WebchurnError::Network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url, "non-success response");
        }

        let body = response
            .text()
            .await
            .map_err(|e| WebchurnError::Network(format!("failed to read body from {url}: {e}")))?;

        debug!(bytes = body.len(), "page fetched");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_sends_fixed_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/article"))
            .and(header("user-agent", "webchurner"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(&FetchConfig::default()).unwrap();
        let body = fetcher
            .fetch(&format!("{}/article", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn fetch_returns_body_on_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(&FetchConfig::default()).unwrap();
        let body = fetcher.fetch(&server.uri()).await.unwrap();
        assert_eq!(body, "not here");
    }
}
