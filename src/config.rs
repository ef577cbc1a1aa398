use crate::crawlers::Locator;
use crate::error::{CrawlError, Result};
use crate::utils;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Configuration for one category crawl
///
/// The locator defaults are tuned for the DOM of OneFlare category and
/// business pages; override them when the markup changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlerSettings {
    /// Category page listing the businesses to visit
    pub category_url: String,

    /// Destination of the exported table
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Seconds to wait after loading the category page
    #[serde(default = "default_preload_delay")]
    pub preload_delay: f64,

    /// Seconds to wait after loading each business page
    #[serde(default = "default_business_page_delay")]
    pub business_page_delay: f64,

    /// Maximum seconds a readiness check may block
    #[serde(default = "default_wait_timeout")]
    pub wait_timeout: f64,

    /// Seconds to wait after clicking the phone reveal control
    #[serde(default = "default_reveal_delay")]
    pub reveal_delay: f64,

    /// XPath of the business links on the category page
    #[serde(default = "default_business_links_xpath")]
    pub business_links_xpath: String,

    /// XPath of the business name heading
    #[serde(default = "default_name_xpath")]
    pub name_xpath: String,

    /// XPath of the "jobs completed" block
    #[serde(default = "default_jobs_xpath")]
    pub jobs_xpath: String,

    /// XPath of the "click to show number" control
    #[serde(default = "default_phone_xpath")]
    pub phone_xpath: String,

    /// CSS selector of the labelled detail blocks (website, address)
    #[serde(default = "default_detail_css_selector")]
    pub detail_css_selector: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Run the browser without a window
    #[serde(default)]
    pub headless: bool,
}

fn default_output_file() -> String {
    "business_data.csv".to_string()
}

fn default_preload_delay() -> f64 {
    60.0
}

fn default_business_page_delay() -> f64 {
    3.0
}

fn default_wait_timeout() -> f64 {
    15.0
}

fn default_reveal_delay() -> f64 {
    0.5
}

fn default_business_links_xpath() -> String {
    "//section[4]//li/h3/a".to_string()
}

fn default_name_xpath() -> String {
    "//h1".to_string()
}

fn default_jobs_xpath() -> String {
    "//main/div/section[1]/section/section[1]/p".to_string()
}

fn default_phone_xpath() -> String {
    "//a[@data-tooltip-content='Click to show number']".to_string()
}

fn default_detail_css_selector() -> String {
    ".sc-906e671e-5.bQwqNJ".to_string()
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

impl CrawlerSettings {
    /// Create validated settings with default values for everything but the category URL
    pub fn new(category_url: &str) -> Result<Self> {
        let settings = Self::defaults(category_url);
        settings.validate()?;
        Ok(settings)
    }

    /// Settings with default values, not yet validated
    pub fn defaults(category_url: &str) -> Self {
        Self {
            category_url: category_url.to_string(),
            output_file: default_output_file(),
            preload_delay: default_preload_delay(),
            business_page_delay: default_business_page_delay(),
            wait_timeout: default_wait_timeout(),
            reveal_delay: default_reveal_delay(),
            business_links_xpath: default_business_links_xpath(),
            name_xpath: default_name_xpath(),
            jobs_xpath: default_jobs_xpath(),
            phone_xpath: default_phone_xpath(),
            detail_css_selector: default_detail_css_selector(),
            webdriver_url: default_webdriver_url(),
            headless: false,
        }
    }

    /// Load settings from a JSON file
    ///
    /// The file is not validated here; CLI overrides are usually applied on top
    /// before calling [`CrawlerSettings::validate`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings)
    }

    /// Check every value; the first problem found is returned
    pub fn validate(&self) -> Result<()> {
        if self.category_url.trim().is_empty() {
            return Err(CrawlError::config("category_url must not be empty"));
        }
        Url::parse(&self.category_url).map_err(|e| {
            CrawlError::config(format!(
                "category_url '{}' is not a valid URL: {}",
                self.category_url, e
            ))
        })?;

        if self.output_file.trim().is_empty() {
            return Err(CrawlError::config("output_file must not be empty"));
        }

        for (name, value) in [
            ("preload_delay", self.preload_delay),
            ("business_page_delay", self.business_page_delay),
            ("reveal_delay", self.reveal_delay),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CrawlError::config(format!(
                    "{} must be >= 0 seconds, got {}",
                    name, value
                )));
            }
            check_duration(name, value)?;
        }

        if !self.wait_timeout.is_finite() || self.wait_timeout <= 0.0 {
            return Err(CrawlError::config(format!(
                "wait_timeout must be > 0 seconds, got {}",
                self.wait_timeout
            )));
        }
        check_duration("wait_timeout", self.wait_timeout)?;

        for (name, value) in [
            ("business_links_xpath", &self.business_links_xpath),
            ("name_xpath", &self.name_xpath),
            ("jobs_xpath", &self.jobs_xpath),
            ("phone_xpath", &self.phone_xpath),
            ("detail_css_selector", &self.detail_css_selector),
            ("webdriver_url", &self.webdriver_url),
        ] {
            if value.trim().is_empty() {
                return Err(CrawlError::config(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }

    pub fn with_output_file(mut self, path: &str) -> Self {
        self.output_file = path.to_string();
        self
    }

    /// Set the category and business page delays in one go
    pub fn with_delays(mut self, preload: f64, business_page: f64) -> Self {
        self.preload_delay = preload;
        self.business_page_delay = business_page;
        self
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Self {
        self.wait_timeout = seconds;
        self
    }

    pub fn with_reveal_delay(mut self, seconds: f64) -> Self {
        self.reveal_delay = seconds;
        self
    }

    pub fn with_webdriver_url(mut self, url: &str) -> Self {
        self.webdriver_url = url.to_string();
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn links_locator(&self) -> Locator {
        Locator::XPath(self.business_links_xpath.clone())
    }

    pub fn name_locator(&self) -> Locator {
        Locator::XPath(self.name_xpath.clone())
    }

    pub fn jobs_locator(&self) -> Locator {
        Locator::XPath(self.jobs_xpath.clone())
    }

    pub fn phone_locator(&self) -> Locator {
        Locator::XPath(self.phone_xpath.clone())
    }

    pub fn detail_locator(&self) -> Locator {
        Locator::Css(self.detail_css_selector.clone())
    }

    pub fn wait_timeout(&self) -> Duration {
        utils::seconds(self.wait_timeout)
    }
}

/// Reject values that cannot be represented as a `Duration`
fn check_duration(name: &str, value: f64) -> Result<()> {
    Duration::try_from_secs_f64(value)
        .map(|_| ())
        .map_err(|e| CrawlError::config(format!("{} of {} seconds is too large: {}", name, value, e)))
}
