use crate::error::DriverError;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Query expression identifying elements on the current page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    XPath(String),
    Css(String),
}

impl Locator {
    /// Borrow as a fantoccini locator
    pub fn as_fantoccini(&self) -> fantoccini::Locator<'_> {
        match self {
            Locator::XPath(xpath) => fantoccini::Locator::XPath(xpath),
            Locator::Css(css) => fantoccini::Locator::Css(css),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::XPath(xpath) => write!(f, "xpath {}", xpath),
            Locator::Css(css) => write!(f, "css {}", css),
        }
    }
}

/// Result of a bounded readiness wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// At least one matching element appeared
    Ready,
    /// The timeout elapsed first
    TimedOut,
}

/// An element handle obtained from a [`PageClient`]
#[async_trait]
pub trait PageElement: Send + Sync {
    /// Rendered text of the element
    async fn text(&self) -> Result<String, DriverError>;

    /// Resolved link target, if the element has one
    async fn href(&self) -> Result<Option<String>, DriverError>;

    /// Click the element
    async fn click(&self) -> Result<(), DriverError>;
}

/// Browser capability used by the crawl pipeline
///
/// All queries run against the page loaded by the last `navigate` call.
/// `find` and `find_all` never wait; use `wait_for` for that.
#[async_trait]
pub trait PageClient: Send + Sync {
    type Element: PageElement;

    /// Load `url` and block until the document reports loaded
    async fn navigate(&self, url: &str) -> Result<(), DriverError>;

    /// Poll for at least one element matching `locator`, for up to `timeout`
    async fn wait_for(&self, locator: &Locator, timeout: Duration)
    -> Result<Readiness, DriverError>;

    /// First matching element in document order
    async fn find(&self, locator: &Locator) -> Result<Option<Self::Element>, DriverError>;

    /// All matching elements in document order
    async fn find_all(&self, locator: &Locator) -> Result<Vec<Self::Element>, DriverError>;

    /// End the session
    async fn close(&self) -> Result<(), DriverError>;
}
