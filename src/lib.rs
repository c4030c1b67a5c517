// Re-export modules
pub mod config;
pub mod diff;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod render;
pub mod report;
pub mod results;
pub mod validate;

// Re-export commonly used types for convenience
pub use error::{CompareError, Result};
pub use results::ComparisonReport;

use std::time::Duration;
use url::Url;

use crate::config::{BrowserEngine, ComparisonConfig};
use crate::diff::content::{self, ContentDiffOutcome};
use crate::diff::links::{self, LinkDiffMode};
use crate::diff::visual::{self, VisualDiffOutcome};
use crate::extract::extract_links;
use crate::fetch::PageFetcher;
use crate::render::Renderer;
use crate::report::ReportWriter;
use crate::results::{ContentSummary, SiteReport, VisualSummary};
use crate::validate::{UrlValidator, ensure_scheme};

/// Builder for a one-shot comparison of two websites.
///
/// Runs the pipeline stages strictly in sequence: validation, fetch, render,
/// diff, persist. Both sites complete each stage before the next begins, and
/// nothing is retained between runs.
pub struct Comparison {
    url1: String,
    url2: String,
    config: ComparisonConfig,
}

impl Comparison {
    /// Create a new comparison between two website URLs
    pub fn new(url1: impl Into<String>, url2: impl Into<String>) -> Self {
        Self {
            url1: url1.into(),
            url2: url2.into(),
            config: ComparisonConfig::default(),
        }
    }

    /// Apply a full configuration
    pub fn with_config(mut self, config: ComparisonConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the WebDriver endpoint
    pub fn with_webdriver_url(mut self, webdriver_url: impl Into<String>) -> Self {
        self.config.renderer.webdriver_url = webdriver_url.into();
        self
    }

    /// Choose the browser engine behind the WebDriver endpoint
    pub fn with_engine(mut self, engine: BrowserEngine) -> Self {
        self.config.renderer.engine = engine;
        self
    }

    /// Capture full-page screenshots instead of the default viewport
    pub fn with_full_page(mut self, full_page: bool) -> Self {
        self.config.renderer.full_page = full_page;
        self
    }

    /// Choose the direction of the link-set comparison
    pub fn with_link_diff_mode(mut self, mode: LinkDiffMode) -> Self {
        self.config.link_diff_mode = mode;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = ComparisonConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Run the comparison pipeline and produce a report.
    ///
    /// Aborts before any output file is written when either URL is invalid,
    /// the URLs are identical, or either primary fetch fails.
    pub async fn run(mut self) -> Result<ComparisonReport> {
        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.config.renderer.webdriver_url = webdriver_url;
            }
        }

        // Stage 1: validation, before any network or browser activity
        let validator = UrlValidator::new();
        if !validator.is_valid(&self.url1) {
            return Err(CompareError::InvalidUrl(self.url1));
        }
        if !validator.is_valid(&self.url2) {
            return Err(CompareError::InvalidUrl(self.url2));
        }
        if self.url1 == self.url2 {
            return Err(CompareError::IdenticalUrls);
        }

        let url1 = ensure_scheme(&self.url1);
        let url2 = ensure_scheme(&self.url2);
        ::log::info!("Comparing {} against {}", url1, url2);

        // Stage 2: fetch both primary pages; either failure aborts the run
        // before any diff output exists
        let fetcher = PageFetcher::new(Duration::from_secs(self.config.fetch_timeout_secs))?;
        let page1 = fetcher.fetch_page(&url1).await?;
        let page2 = fetcher.fetch_page(&url2).await?;

        // Link extraction operates on the raw fetched HTML
        let base1 = parse_base_url(&url1)?;
        let base2 = parse_base_url(&url2)?;
        let links1 = extract_links(&page1.body, &base1);
        let links2 = extract_links(&page2.body, &base2);

        // Best-effort link health check; individual failures never abort
        let (broken1, broken2) = if self.config.check_links {
            let broken1 = fetcher.check_links(&links1).await;
            let broken2 = fetcher.check_links(&links2).await;
            println!("Broken links in Website 1: {:?}", broken1);
            println!("Broken links in Website 2: {:?}", broken2);
            (broken1, broken2)
        } else {
            (Vec::new(), Vec::new())
        };

        // Stage 3: render both sites, one independent browser session each
        let renderer = Renderer::new(self.config.renderer.clone());
        let rendered1 = renderer.capture(&url1).await?;
        let rendered2 = renderer.capture(&url2).await?;
        println!(
            "Page load time for {}: {:.2} seconds",
            url1, rendered1.load_time_secs
        );
        println!(
            "Page load time for {}: {:.2} seconds",
            url2, rendered2.load_time_secs
        );

        // Stages 4 and 5: diff the captures and persist the artifacts
        let writer = ReportWriter::new(&self.config.output_dir);

        let content = match content::diff_documents(&rendered1.source, &rendered2.source) {
            ContentDiffOutcome::Identical => {
                println!("The two pages have identical content.");
                ContentSummary::Identical
            }
            ContentDiffOutcome::Different(diff) => {
                let html = diff.to_html(&url1, &url2);
                let path = writer.write_content_diff(&html, &self.config.content_diff_file)?;
                ContentSummary::Different {
                    report_file: path.display().to_string(),
                }
            }
        };

        writer.write_screenshot(&rendered1.screenshot, report::SCREENSHOT_1_FILE)?;
        writer.write_screenshot(&rendered2.screenshot, report::SCREENSHOT_2_FILE)?;

        let image1 = visual::load_png(&rendered1.screenshot)?;
        let image2 = visual::load_png(&rendered2.screenshot)?;
        let visual = match visual::diff_images(&image1, &image2) {
            VisualDiffOutcome::Identical => {
                println!("No visual differences.");
                VisualSummary::Identical
            }
            VisualDiffOutcome::DimensionMismatch { first, second } => {
                println!(
                    "Screenshots differ in size ({}x{} vs {}x{}); skipping pixel comparison.",
                    first.0, first.1, second.0, second.1
                );
                VisualSummary::DimensionMismatch { first, second }
            }
            VisualDiffOutcome::Different {
                image,
                bounding_box,
            } => {
                let path = writer.write_visual_diff(&image)?;
                VisualSummary::Different {
                    bounding_box,
                    diff_file: path.display().to_string(),
                }
            }
        };

        let link_diff = links::diff_link_sets(&links1, &links2, self.config.link_diff_mode);
        if link_diff.missing_from_second.is_empty() {
            println!("No links in Website 1 are missing from Website 2.");
        } else {
            println!(
                "Links in Website 1 missing from Website 2: {:?}",
                link_diff.missing_from_second
            );
        }
        if let Some(missing) = &link_diff.missing_from_first {
            if missing.is_empty() {
                println!("No links in Website 2 are missing from Website 1.");
            } else {
                println!("Links in Website 2 missing from Website 1: {:?}", missing);
            }
        }

        writer.write_page_urls(&url1, &links1, report::PAGE_URLS_1_FILE)?;
        writer.write_page_urls(&url2, &links2, report::PAGE_URLS_2_FILE)?;

        Ok(ComparisonReport {
            first: SiteReport {
                url: url1,
                page_load_secs: rendered1.load_time_secs,
                links: links1,
                broken_links: broken1,
            },
            second: SiteReport {
                url: url2,
                page_load_secs: rendered2.load_time_secs,
                links: links2,
                broken_links: broken2,
            },
            content,
            visual,
            links: link_diff,
        })
    }
}

/// Parses a validated, scheme-qualified URL into a base for link resolution
fn parse_base_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|_| CompareError::InvalidUrl(url.to_string()))
}
