use crate::config::CrawlerSettings;
use crate::crawlers::business::extract_business;
use crate::crawlers::crawler::PageClient;
use crate::crawlers::harvest::harvest_links;
use crate::error::Result;
use crate::results::{CrawlReport, SkippedUrl};

/// Where a crawl run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlPhase {
    /// Collecting business links from the category page
    Harvesting,
    /// Visiting business pages one by one
    Extracting,
}

/// Runs one category crawl over a borrowed page client
///
/// Pages are visited strictly one after another. A business page that fails
/// is logged and left out; it never stops the run.
pub struct Crawler<'a, P: PageClient> {
    page: &'a P,
    settings: &'a CrawlerSettings,
    phase: CrawlPhase,
}

impl<'a, P: PageClient> Crawler<'a, P> {
    /// Create a crawler; fails if the settings are invalid
    pub fn new(page: &'a P, settings: &'a CrawlerSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            page,
            settings,
            phase: CrawlPhase::Harvesting,
        })
    }

    pub fn phase(&self) -> CrawlPhase {
        self.phase
    }

    /// Harvest the category page, then extract every business in harvest order
    pub async fn run(&mut self) -> CrawlReport {
        let start_time = std::time::Instant::now();

        let links = match harvest_links(self.page, self.settings).await {
            Ok(links) => links,
            Err(e) => {
                ::log::error!("Failed to collect business links: {}", e);
                Vec::new()
            }
        };
        ::log::info!("Found {} business links.", links.len());
        if links.is_empty() {
            ::log::warn!(
                "No business links found on {}",
                self.settings.category_url
            );
        }

        self.phase = CrawlPhase::Extracting;
        ::log::info!("Extracting details from {} business pages", links.len());

        let mut report = CrawlReport {
            records: Vec::with_capacity(links.len()),
            links_found: links.len(),
            skipped: Vec::new(),
        };

        for (index, url) in links.into_iter().enumerate() {
            ::log::debug!("Business {} of {}: {}", index + 1, report.links_found, url);
            match extract_business(self.page, self.settings, &url).await {
                Ok(record) => report.records.push(record),
                Err(e) => {
                    ::log::error!("Failed to process {}: {}", url, e);
                    report.skipped.push(SkippedUrl {
                        url,
                        reason: e.to_string(),
                    });
                }
            }
        }

        ::log::info!(
            "Extraction complete - {} records, {} skipped in {:.2} seconds",
            report.records.len(),
            report.skipped.len(),
            start_time.elapsed().as_secs_f64()
        );
        if report.is_empty() {
            ::log::warn!(
                "No business records collected. Inspect selectors or delays for adjustments."
            );
        }

        report
    }
}
