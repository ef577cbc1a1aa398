//! Error types for the crawler

use thiserror::Error;

/// Failure reported by a page client (browser session)
#[derive(Debug, Clone, Error)]
pub enum DriverError {
    /// The session could not carry out a command (stale element, lost session, ...)
    #[error("WebDriver command failed: {0}")]
    Command(String),

    /// The element refused an interaction such as a click
    #[error("element not interactable: {0}")]
    NotInteractable(String),
}

impl From<fantoccini::error::CmdError> for DriverError {
    fn from(err: fantoccini::error::CmdError) -> Self {
        DriverError::Command(err.to_string())
    }
}

/// Error type for a crawl run
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Invalid settings; raised before any browser work starts
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The configuration file could not be parsed
    #[error("config file error: {0}")]
    ConfigFile(#[from] serde_json::Error),

    /// No browser session could be started
    #[error("could not start browser session: {0}")]
    SessionInit(String),

    /// Navigating to a page failed
    #[error("navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: DriverError,
    },

    /// Any other driver failure outside of field lookups
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// Writing the output table failed
    #[error("export failed: {0}")]
    Export(#[from] csv::Error),

    /// Writing the output workbook failed
    #[error("workbook export failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CrawlError {
    /// Shorthand for a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        CrawlError::Configuration(msg.into())
    }

    /// Wraps a driver error raised while navigating to `url`
    pub fn navigation(url: &str, source: DriverError) -> Self {
        CrawlError::Navigation {
            url: url.to_string(),
            source,
        }
    }
}

pub type Result<T, E = CrawlError> = std::result::Result<T, E>;
