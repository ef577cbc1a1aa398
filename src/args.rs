use clap::Parser;
use listing_harvest::{CrawlError, CrawlerSettings};
use std::path::PathBuf;

const DEFAULT_CATEGORY_URL: &str = "https://www.oneflare.com.au/air-conditioning";

#[derive(Parser, Debug)]
#[command(name = "listing-harvest")]
#[command(about = "Crawl a OneFlare category page and export business details")]
#[command(version)]
pub struct Args {
    /// Category page to crawl [default: https://www.oneflare.com.au/air-conditioning]
    #[arg(long)]
    pub category_url: Option<String>,

    /// JSON settings file; command-line flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Destination file, CSV or .xlsx by extension [default: business_data.csv]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Seconds to wait after loading the category page [default: 60]
    #[arg(long)]
    pub preload_delay: Option<f64>,

    /// Seconds to wait after loading each business page [default: 3]
    #[arg(long)]
    pub business_page_delay: Option<f64>,

    /// Maximum seconds to wait for key elements [default: 15]
    #[arg(long)]
    pub wait_timeout: Option<f64>,

    /// Seconds to wait after clicking the phone reveal control [default: 0.5]
    #[arg(long)]
    pub reveal_delay: Option<f64>,

    /// XPath of the business links on the category page
    #[arg(long)]
    pub links_xpath: Option<String>,

    /// XPath of the business name
    #[arg(long)]
    pub name_xpath: Option<String>,

    /// XPath of the jobs completed block
    #[arg(long)]
    pub jobs_xpath: Option<String>,

    /// XPath of the phone reveal control
    #[arg(long)]
    pub phone_xpath: Option<String>,

    /// CSS selector of the website/address detail blocks
    #[arg(long)]
    pub detail_selector: Option<String>,

    /// WebDriver server URL [default: WEBDRIVER_URL or http://localhost:4444]
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Run Chrome in headless mode
    #[arg(long)]
    pub headless: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build validated settings
    ///
    /// Precedence: command-line flag, then WEBDRIVER_URL (driver URL only),
    /// then the config file, then defaults.
    pub fn to_settings(&self) -> Result<CrawlerSettings, CrawlError> {
        let mut settings = match &self.config {
            Some(path) => {
                ::log::info!("Loading settings from {}", path.display());
                CrawlerSettings::from_file(path)?
            }
            None => CrawlerSettings::defaults(DEFAULT_CATEGORY_URL),
        };

        apply(&mut settings.category_url, &self.category_url);
        apply(&mut settings.output_file, &self.output);
        apply(&mut settings.preload_delay, &self.preload_delay);
        apply(&mut settings.business_page_delay, &self.business_page_delay);
        apply(&mut settings.wait_timeout, &self.wait_timeout);
        apply(&mut settings.reveal_delay, &self.reveal_delay);
        apply(&mut settings.business_links_xpath, &self.links_xpath);
        apply(&mut settings.name_xpath, &self.name_xpath);
        apply(&mut settings.jobs_xpath, &self.jobs_xpath);
        apply(&mut settings.phone_xpath, &self.phone_xpath);
        apply(&mut settings.detail_css_selector, &self.detail_selector);

        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                settings.webdriver_url = webdriver_url;
            }
        }
        apply(&mut settings.webdriver_url, &self.webdriver_url);

        if self.headless {
            settings.headless = true;
        }

        settings.validate()?;
        Ok(settings)
    }
}

fn apply<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}
