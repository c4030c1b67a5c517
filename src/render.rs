use fantoccini::{Client, ClientBuilder};

use crate::config::RendererConfig;
use crate::error::Result;

/// A rendered page snapshot taken from a live browser session
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// URL the session navigated to
    pub url: String,

    /// Fully rendered DOM serialization
    pub source: String,

    /// Seconds from navigation start to load-event-end
    pub load_time_secs: f64,

    /// PNG screenshot bytes
    pub screenshot: Vec<u8>,
}

/// Drives one headless browser session per captured site.
///
/// Sessions are never reused or pooled: each capture connects a fresh session
/// and closes it before returning.
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    /// Create a renderer from explicit configuration
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Navigate to `url` in a fresh session and capture the page source,
    /// navigation timing and a screenshot.
    ///
    /// The session is closed on every exit path, including capture errors, so
    /// no browser/driver process leaks.
    pub async fn capture(&self, url: &str) -> Result<RenderedPage> {
        let client = self.connect().await?;
        let result = self.capture_page(&client, url).await;

        if let Err(e) = client.close().await {
            ::log::warn!("Failed to close browser session: {}", e);
        }

        result
    }

    async fn connect(&self) -> Result<Client> {
        ::log::debug!(
            "Connecting to WebDriver at {} ({:?} engine)",
            self.config.webdriver_url,
            self.config.engine
        );
        let client = ClientBuilder::native()
            .capabilities(self.config.engine.capabilities())
            .connect(&self.config.webdriver_url)
            .await?;
        Ok(client)
    }

    async fn capture_page(&self, client: &Client, url: &str) -> Result<RenderedPage> {
        client.goto(url).await?;

        let source = client.source().await?;
        let load_time_secs = page_load_time(client).await?;
        let screenshot = if self.config.full_page {
            full_page_screenshot(client).await?
        } else {
            client.screenshot().await?
        };

        ::log::info!(
            "Captured {}: {} bytes of source, {} byte screenshot, loaded in {:.2}s",
            url,
            source.len(),
            screenshot.len(),
            load_time_secs
        );

        Ok(RenderedPage {
            url: url.to_string(),
            source,
            load_time_secs,
            screenshot,
        })
    }
}

/// Seconds from navigation start to load-event-end, read from the browser's
/// Navigation Timing API
async fn page_load_time(client: &Client) -> Result<f64> {
    let navigation_start = timing_value(client, "navigationStart").await?;
    let load_event_end = timing_value(client, "loadEventEnd").await?;

    // loadEventEnd is 0 until the load event finishes firing
    Ok(((load_event_end - navigation_start) / 1000.0).max(0.0))
}

async fn timing_value(client: &Client, field: &str) -> Result<f64> {
    let script = format!("return window.performance.timing.{};", field);
    let value = client.execute(&script, vec![]).await?;
    Ok(value.as_f64().unwrap_or(0.0))
}

/// Captures a screenshot of the full scrollable page.
///
/// Resizes the window to the page's scroll extent, captures, then restores
/// the original window size even when the capture itself fails.
async fn full_page_screenshot(client: &Client) -> Result<Vec<u8>> {
    let (orig_width, orig_height) = client.get_window_size().await?;

    let full_width = scroll_extent(client, "Width").await?;
    let full_height = scroll_extent(client, "Height").await?;
    ::log::debug!(
        "Resizing window to {}x{} for full-page capture",
        full_width,
        full_height
    );
    client.set_window_size(full_width, full_height).await?;

    let screenshot = client.screenshot().await;

    if let Err(e) = client
        .set_window_size(orig_width as u32, orig_height as u32)
        .await
    {
        ::log::warn!("Failed to restore window size: {}", e);
    }

    Ok(screenshot?)
}

/// Full scroll extent along one axis ("Width" or "Height"), from whichever of
/// body and documentElement is larger
async fn scroll_extent(client: &Client, axis: &str) -> Result<u32> {
    let script = format!(
        "return Math.max(document.body.scroll{0}, document.documentElement.scroll{0});",
        axis
    );
    let value = client.execute(&script, vec![]).await?;
    Ok((value.as_f64().unwrap_or(0.0) as u32).max(1))
}
