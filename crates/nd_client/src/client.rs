use async_trait::async_trait;
use nd_core::{Config, Error, PageRequest, PageResult, Result};
use url::Url;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetches one page of articles. Makes a single attempt.
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult>;
}

/// HTTP client for the `/api/news` listing endpoint.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl NewsClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_http_client(http, config)
    }

    pub fn with_http_client(http: reqwest::Client, config: &Config) -> Result<Self> {
        Ok(Self {
            http,
            endpoint: config.news_endpoint()?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn page_url(&self, request: &PageRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .extend_pairs(request.query_pairs().iter().map(|(k, v)| (*k, v.as_str())));
        url
    }

    async fn get_page(&self, request: &PageRequest) -> Result<PageResult> {
        let url = self.page_url(request);
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl NewsSource for NewsClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult> {
        match self.get_page(request).await {
            Ok(page) => {
                tracing::debug!(
                    "Fetched page {} ({} articles, {} pages)",
                    request.page,
                    page.content.len(),
                    page.total_pages
                );
                Ok(page)
            }
            Err(e) => {
                tracing::error!("Error fetching news page {}: {}", request.page, e);
                Err(e)
            }
        }
    }
}
