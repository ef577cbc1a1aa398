//! Browser-driven extraction of business listings from a directory category page.
//!
//! The pipeline harvests business links from one category page, visits each
//! business page in turn to read its details, and exports the records as CSV or an `.xlsx` workbook.

pub mod config;
pub mod crawlers;
pub mod error;
pub mod export;
pub mod parsers;
pub mod results;
pub mod utils;

pub use config::CrawlerSettings;
pub use crawlers::{Crawler, PageClient, WebDriverPage};
pub use error::{CrawlError, DriverError};
pub use results::{BusinessRecord, CrawlReport, NOT_AVAILABLE};

/// Crawl with a fresh WebDriver session and export the results
///
/// Fails before any extraction if the settings are invalid or no session can
/// be started.
pub async fn run(settings: &CrawlerSettings) -> Result<CrawlReport, CrawlError> {
    settings.validate()?;
    let page = WebDriverPage::connect(settings).await?;
    run_with(&page, settings).await
}

/// Crawl using `page`, close it, then write the output file
///
/// The page is closed whether or not the crawl produced anything; the output
/// file is written afterwards, even when there are no records.
pub async fn run_with<P: PageClient>(
    page: &P,
    settings: &CrawlerSettings,
) -> Result<CrawlReport, CrawlError> {
    let report = match Crawler::new(page, settings) {
        Ok(mut crawler) => Ok(crawler.run().await),
        Err(e) => Err(e),
    };

    if let Err(e) = page.close().await {
        ::log::warn!("Failed to close browser session: {}", e);
    }

    let report = report?;
    export::write_table(&report.records, &settings.output_file)?;
    Ok(report)
}
