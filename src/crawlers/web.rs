use crate::config::CrawlerSettings;
use crate::crawlers::crawler::{Locator, PageClient, PageElement, Readiness};
use crate::error::{CrawlError, DriverError};
use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use std::time::Duration;

/// Endpoints tried when the configured WebDriver URL does not answer
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Page client backed by a WebDriver session
pub struct WebDriverPage {
    client: Client,
}

/// Element handle from a WebDriver session
#[derive(Clone)]
pub struct WebDriverElement {
    element: Element,
}

impl WebDriverPage {
    /// Start a Chrome session using the driver URL and window options in `settings`
    pub async fn connect(settings: &CrawlerSettings) -> Result<Self, CrawlError> {
        let capabilities = chrome_capabilities(settings.headless);
        let client = connect_to_webdriver(&settings.webdriver_url, capabilities).await?;

        if let Err(e) = client.maximize_window().await {
            ::log::debug!("Unable to maximize window; continuing with default size: {}", e);
        }

        Ok(Self { client })
    }
}

/// Builds the Chrome capabilities for the session
fn chrome_capabilities(headless: bool) -> serde_json::Map<String, serde_json::Value> {
    let mut args = vec!["--start-maximized"];
    if headless {
        args.push("--headless=new");
    }

    let mut capabilities = serde_json::Map::new();
    capabilities.insert("browserName".to_string(), json!("chrome"));
    capabilities.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    capabilities
}

/// Connects to the WebDriver instance, falling back to the usual local ports
async fn connect_to_webdriver(
    webdriver_url: &str,
    capabilities: serde_json::Map<String, serde_json::Value>,
) -> Result<Client, CrawlError> {
    let mut builder = ClientBuilder::native();
    builder.capabilities(capabilities);

    let first_error = match builder.connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            e.to_string()
        }
    };

    for url in FALLBACK_WEBDRIVER_URLS.iter() {
        if *url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = builder.connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(CrawlError::SessionInit(format!(
        "no WebDriver server reachable at {} or fallback URLs ({})",
        webdriver_url, first_error
    )))
}

/// Classifies a failed click
fn click_error(error: CmdError) -> DriverError {
    let message = error.to_string();
    if message.contains("not interactable") || message.contains("click intercepted") {
        DriverError::NotInteractable(message)
    } else {
        DriverError::Command(message)
    }
}

#[async_trait]
impl PageElement for WebDriverElement {
    async fn text(&self) -> Result<String, DriverError> {
        Ok(self.element.text().await?)
    }

    async fn href(&self) -> Result<Option<String>, DriverError> {
        // The property (unlike the attribute) is already resolved against the page URL
        Ok(self.element.prop("href").await?)
    }

    async fn click(&self) -> Result<(), DriverError> {
        self.element
            .clone()
            .click()
            .await
            .map(|_| ())
            .map_err(click_error)
    }
}

#[async_trait]
impl PageClient for WebDriverPage {
    type Element = WebDriverElement;

    async fn navigate(&self, url: &str) -> Result<(), DriverError> {
        Ok(self.client.goto(url).await?)
    }

    async fn wait_for(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> Result<Readiness, DriverError> {
        match self
            .client
            .wait()
            .at_most(timeout)
            .for_element(locator.as_fantoccini())
            .await
        {
            Ok(_) => Ok(Readiness::Ready),
            Err(CmdError::WaitTimeout) => Ok(Readiness::TimedOut),
            Err(e) => Err(e.into()),
        }
    }

    async fn find(&self, locator: &Locator) -> Result<Option<Self::Element>, DriverError> {
        // find_all reports "no match" as an empty list rather than an error
        Ok(self.find_all(locator).await?.into_iter().next())
    }

    async fn find_all(&self, locator: &Locator) -> Result<Vec<Self::Element>, DriverError> {
        let elements = self.client.find_all(locator.as_fantoccini()).await?;
        Ok(elements
            .into_iter()
            .map(|element| WebDriverElement { element })
            .collect())
    }

    async fn close(&self) -> Result<(), DriverError> {
        Ok(self.client.clone().close().await?)
    }
}
