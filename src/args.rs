use clap::{Parser, ValueEnum};
use page_parity::config::BrowserEngine;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-parity")]
#[command(about = "Compares two websites by rendered content, screenshots and link sets")]
#[command(version)]
pub struct Args {
    /// First website URL (prompted for interactively when omitted)
    pub url1: Option<String>,

    /// Second website URL (prompted for interactively when omitted)
    pub url2: Option<String>,

    /// Browser engine behind the WebDriver endpoint
    #[arg(short, long, value_enum)]
    pub engine: Option<EngineArg>,

    /// WebDriver endpoint (defaults to http://localhost:4444)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Capture full-page screenshots instead of the viewport
    #[arg(long)]
    pub full_page: bool,

    /// Report links missing in either direction, not just Website 1's
    #[arg(long)]
    pub symmetric_links: bool,

    /// Skip the per-link HEAD health check
    #[arg(long)]
    pub no_link_check: bool,

    /// Directory the output artifacts are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// JSON configuration file (flags override its values)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum EngineArg {
    Chrome,
    Firefox,
}

/// Convert from CLI argument engine type to internal engine type
pub fn convert_engine(arg: EngineArg) -> BrowserEngine {
    match arg {
        EngineArg::Chrome => BrowserEngine::Chrome,
        EngineArg::Firefox => BrowserEngine::Firefox,
    }
}
