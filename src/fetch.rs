use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::error::{CompareError, Result};

/// A fetched page: the final status code plus the raw body
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL the page was fetched from
    pub url: String,

    /// HTTP status code of the response
    pub status: u16,

    /// Raw response body
    pub body: String,
}

/// HTTP client wrapper for primary page fetches and link health checks
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Create a fetcher with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("page-parity/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CompareError::HttpClient)?;
        Ok(Self { client })
    }

    /// GET the primary page for a site.
    ///
    /// Any response other than 200 is a fetch failure: the caller must not
    /// proceed to render or diff with partial content.
    pub async fn fetch_page(&self, url: &str) -> Result<FetchedPage> {
        ::log::info!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CompareError::Network {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CompareError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| CompareError::Network {
            url: url.to_string(),
            source: e,
        })?;

        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(FetchedPage {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }

    /// HEAD every link and collect the ones that do not answer 200.
    ///
    /// Best-effort: a network error on an individual link marks that link
    /// broken rather than failing the run.
    pub async fn check_links(&self, links: &[String]) -> Vec<String> {
        let mut broken = Vec::new();

        for link in links {
            match self.client.head(link).send().await {
                Ok(response) if response.status() == StatusCode::OK => {}
                Ok(response) => {
                    ::log::debug!("Link {} answered status {}", link, response.status());
                    broken.push(link.clone());
                }
                Err(e) => {
                    ::log::debug!("Link {} failed: {}", link, e);
                    broken.push(link.clone());
                }
            }
        }

        ::log::info!(
            "Link check complete: {} of {} links broken",
            broken.len(),
            links.len()
        );
        broken
    }
}
