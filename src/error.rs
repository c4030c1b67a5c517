use thiserror::Error;

/// Errors surfaced by the comparison pipeline
///
/// Every variant renders as a human-readable message suitable for printing
/// directly to the console; none are retried.
#[derive(Error, Debug)]
pub enum CompareError {
    // Input errors - raised before any network or browser activity
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Please enter two different URLs for website 1 and website 2.")]
    IdenticalUrls,

    // Fetch errors - abort the run before any diff output is written
    #[error("Error: Website could not be accessed ({url} returned status {status}).")]
    HttpStatus { url: String, status: u16 },

    #[error("Error: Network failure fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    // Renderer errors - the browser session is still torn down
    #[error("Failed to start browser session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    #[error("Browser command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    // Artifact errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias using CompareError
pub type Result<T> = std::result::Result<T, CompareError>;
