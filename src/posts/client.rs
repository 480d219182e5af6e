use crate::config::PostsApiConfig;
use crate::error::{GatewayError, Result};
use crate::posts::{PostRecord, PostSource};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// REST data source for the upstream posts service.
///
/// # Example
///
/// ```no_run
/// use postbridge::posts::{PostSource, PostsApi};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api = PostsApi::new("https://jsonplaceholder.typicode.com/", None)?;
///
/// let posts = api.get_posts().await?;
/// # Ok(())
/// # }
/// ```
pub struct PostsApi {
    base_url: String,
    client: Client,
}

impl PostsApi {
    /// Create a new posts data source
    ///
    /// # Arguments
    ///
    /// * `base_url` - Upstream service URL (e.g., "https://jsonplaceholder.typicode.com/")
    /// * `timeout` - Optional per-request timeout; requests wait indefinitely when `None`
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn from_config(config: &PostsApiConfig) -> Result<Self> {
        Self::new(&config.base_url, config.timeout_secs.map(Duration::from_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Map non-success statuses to upstream errors
    fn handle_response_error(url: &str, status: StatusCode) -> Result<()> {
        if status.is_success() {
            return Ok(());
        }

        Err(GatewayError::Upstream(format!(
            "GET {} failed with status {}",
            url, status
        )))
    }
}

#[async_trait]
impl PostSource for PostsApi {
    /// Fetch the full posts collection
    ///
    /// # API Endpoint
    ///
    /// `GET {base_url}/posts`
    async fn get_posts(&self) -> Result<Vec<PostRecord>> {
        let url = self.url("/posts");

        tracing::debug!("Fetching posts from {}", url);

        let response = self.client.get(&url).send().await?;

        Self::handle_response_error(&url, response.status())?;

        let posts: Vec<PostRecord> = response
            .json()
            .await
            .map_err(|e| GatewayError::Upstream(format!("Failed to parse posts response: {}", e)))?;

        tracing::debug!("Fetched {} posts", posts.len());
        Ok(posts)
    }
}
