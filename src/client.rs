use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

/// HTTP client for a running hello counter service.
pub struct HelloClient {
    http_client: Client,
    base_url: Url,
    timeout: std::time::Duration,
}

/// Status and body text of a response, as observed by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ParseUrlError(String);

#[derive(Debug, Error)]
pub enum HelloClientError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    ParseUrl(#[from] ParseUrlError),
}

impl HelloClient {
    pub fn new(base_url: &str, timeout: std::time::Duration) -> Result<Self, HelloClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ParseUrlError(e.to_string()))?;

        Ok(Self {
            http_client: Client::new(),
            base_url,
            timeout,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, HelloClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ParseUrlError(e.to_string()).into())
    }

    /// Send POST request to `/v1/hello` for `name`.
    pub async fn greet(&self, name: &str) -> Result<TextResponse, HelloClientError> {
        let url = self.endpoint("v1/hello")?;
        let response = self
            .http_client
            .post(url)
            .query(&[("name", name)])
            .timeout(self.timeout)
            .send()
            .await?;

        Self::read_text(response).await
    }

    /// Send GET request to `/v1/top10`.
    pub async fn top10(&self) -> Result<TextResponse, HelloClientError> {
        let url = self.endpoint("v1/top10")?;
        let response = self
            .http_client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;

        Self::read_text(response).await
    }

    /// Send GET request to `/health`.
    pub async fn health_check(&self) -> Result<StatusCode, HelloClientError> {
        let url = self.endpoint("health")?;
        let response = self
            .http_client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;

        Ok(response.status())
    }

    async fn read_text(response: reqwest::Response) -> Result<TextResponse, HelloClientError> {
        // Non-2xx statuses are returned to the caller, not turned into errors
        let status = response.status();
        let body = response.text().await?;

        Ok(TextResponse { status, body })
    }
}
