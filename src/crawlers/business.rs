use crate::config::CrawlerSettings;
use crate::crawlers::crawler::{PageClient, Readiness};
use crate::crawlers::fields;
use crate::error::{CrawlError, Result};
use crate::parsers::or_not_available;
use crate::results::BusinessRecord;
use crate::utils::pause;

/// Loads one business page and reads every field from it
///
/// Missing fields become `N/A`. Only driver failures (navigation, a broken
/// session) are returned as errors.
pub async fn extract_business<P: PageClient>(
    page: &P,
    settings: &CrawlerSettings,
    url: &str,
) -> Result<BusinessRecord> {
    ::log::info!("Scraping business details from {}", url);
    page.navigate(url)
        .await
        .map_err(|e| CrawlError::navigation(url, e))?;

    if page
        .wait_for(&settings.name_locator(), settings.wait_timeout())
        .await?
        == Readiness::TimedOut
    {
        ::log::warn!("Business name field did not load for {}.", url);
    }

    pause(settings.business_page_delay, "business page details").await;

    let business_name =
        or_not_available("business name", url, fields::business_name(page, settings).await);
    let jobs_completed =
        or_not_available("jobs completed", url, fields::jobs_completed(page, settings).await);
    let phone_number =
        or_not_available("phone number", url, fields::phone_number(page, settings).await);
    let website_url = or_not_available("website", url, fields::website(page, settings).await);
    let address = or_not_available("address", url, fields::address(page, settings).await);

    Ok(BusinessRecord {
        business_name,
        jobs_completed,
        phone_number,
        website_url,
        address,
        url: url.to_string(),
    })
}
