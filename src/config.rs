use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::diff::links::LinkDiffMode;
use crate::error::Result;

/// Browser engine behind the WebDriver endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserEngine {
    /// Chromium-based browser, typically behind chromedriver
    #[default]
    Chrome,

    /// Firefox, typically behind geckodriver
    Firefox,
}

impl BrowserEngine {
    /// W3C capabilities for a headless session of this engine.
    ///
    /// Chrome additionally gets no-sandbox and disabled shared memory, which
    /// constrained/containerized environments require.
    pub fn capabilities(self) -> serde_json::Map<String, serde_json::Value> {
        let mut caps = serde_json::Map::new();
        match self {
            BrowserEngine::Chrome => {
                caps.insert("browserName".to_string(), serde_json::json!("chrome"));
                caps.insert(
                    "goog:chromeOptions".to_string(),
                    serde_json::json!({
                        "args": ["--headless", "--no-sandbox", "--disable-dev-shm-usage"]
                    }),
                );
            }
            BrowserEngine::Firefox => {
                caps.insert("browserName".to_string(), serde_json::json!("firefox"));
                caps.insert(
                    "moz:firefoxOptions".to_string(),
                    serde_json::json!({ "args": ["-headless"] }),
                );
            }
        }
        caps
    }
}

/// Configuration for the browser renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendererConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Browser engine behind the WebDriver endpoint
    #[serde(default)]
    pub engine: BrowserEngine,

    /// Whether screenshots capture the full scrollable page instead of the viewport
    #[serde(default)]
    pub full_page: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            engine: BrowserEngine::default(),
            full_page: false,
        }
    }
}

/// Configuration for a website comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Browser renderer settings
    #[serde(default)]
    pub renderer: RendererConfig,

    /// Whether discovered links get a best-effort HEAD health check
    #[serde(default = "default_check_links")]
    pub check_links: bool,

    /// Direction of the link-set comparison
    #[serde(default)]
    pub link_diff_mode: LinkDiffMode,

    /// Timeout for primary page fetches, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Directory the output artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Filename of the content diff report
    #[serde(default = "default_content_diff_file")]
    pub content_diff_file: String,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            renderer: RendererConfig::default(),
            check_links: default_check_links(),
            link_diff_mode: LinkDiffMode::default(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            output_dir: default_output_dir(),
            content_diff_file: default_content_diff_file(),
        }
    }
}

impl ComparisonConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for check_links
fn default_check_links() -> bool {
    true
}

/// Default fetch timeout in seconds
fn default_fetch_timeout_secs() -> u64 {
    30
}

/// Default output directory (the current working directory)
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Default content diff report filename
fn default_content_diff_file() -> String {
    "content_diff.html".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ComparisonConfig::default();
        assert_eq!(config.renderer.webdriver_url, "http://localhost:4444");
        assert_eq!(config.renderer.engine, BrowserEngine::Chrome);
        assert!(!config.renderer.full_page);
        assert!(config.check_links);
        assert_eq!(config.link_diff_mode, LinkDiffMode::OneWay);
        assert_eq!(config.fetch_timeout_secs, 30);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.content_diff_file, "content_diff.html");
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: ComparisonConfig = serde_json::from_str(
            r#"{
                "renderer": { "engine": "firefox", "full_page": true },
                "link_diff_mode": "symmetric"
            }"#,
        )
        .unwrap();

        assert_eq!(config.renderer.engine, BrowserEngine::Firefox);
        assert!(config.renderer.full_page);
        assert_eq!(config.renderer.webdriver_url, "http://localhost:4444");
        assert_eq!(config.link_diff_mode, LinkDiffMode::Symmetric);
        assert!(config.check_links);
    }

    #[test]
    fn test_chrome_capabilities_carry_container_flags() {
        let caps = BrowserEngine::Chrome.capabilities();
        let options = caps.get("goog:chromeOptions").unwrap();
        let args = options.get("args").unwrap().as_array().unwrap();
        assert!(args.iter().any(|a| a == "--headless"));
        assert!(args.iter().any(|a| a == "--no-sandbox"));
        assert!(args.iter().any(|a| a == "--disable-dev-shm-usage"));
    }

    #[test]
    fn test_firefox_capabilities_are_headless() {
        let caps = BrowserEngine::Firefox.capabilities();
        let options = caps.get("moz:firefoxOptions").unwrap();
        let args = options.get("args").unwrap().as_array().unwrap();
        assert!(args.iter().any(|a| a == "-headless"));
    }
}
