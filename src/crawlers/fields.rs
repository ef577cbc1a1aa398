//! Field extractors that read one value each from the current business page.
//!
//! None of these fail: every problem is reported as an [`Absent`] reason and
//! turned into the placeholder when the record is assembled.

use crate::config::CrawlerSettings;
use crate::crawlers::crawler::{Locator, PageClient, PageElement};
use crate::error::DriverError;
use crate::parsers::{Absent, Extracted, fields};
use crate::utils::pause;

fn lookup(error: DriverError) -> Absent {
    Absent::Lookup(error.to_string())
}

async fn first_element<P: PageClient>(page: &P, locator: &Locator) -> Result<P::Element, Absent> {
    page.find(locator)
        .await
        .map_err(lookup)?
        .ok_or(Absent::Missing)
}

/// Trimmed text of the first element matching `locator`
pub async fn text_of<P: PageClient>(page: &P, locator: &Locator) -> Extracted {
    let element = first_element(page, locator).await?;
    let text = element.text().await.map_err(lookup)?;
    fields::trimmed(&text)
}

pub async fn business_name<P: PageClient>(page: &P, settings: &CrawlerSettings) -> Extracted {
    text_of(page, &settings.name_locator()).await
}

pub async fn jobs_completed<P: PageClient>(page: &P, settings: &CrawlerSettings) -> Extracted {
    let text = text_of(page, &settings.jobs_locator()).await?;
    fields::jobs_completed(&text)
}

/// Clicks the "show number" control, then reads whatever it displays
///
/// A failed click is not fatal: the text already visible is used instead.
pub async fn phone_number<P: PageClient>(page: &P, settings: &CrawlerSettings) -> Extracted {
    let element = first_element(page, &settings.phone_locator()).await?;

    match element.click().await {
        Ok(()) => pause(settings.reveal_delay, "phone number reveal").await,
        Err(e) => ::log::debug!("Phone element click failed; returning visible text: {}", e),
    }

    let text = element.text().await.map_err(lookup)?;
    fields::trimmed(&text)
}

/// Texts of all detail blocks, in document order
///
/// Blocks whose text cannot be read are left out.
pub async fn detail_blocks<P: PageClient>(
    page: &P,
    settings: &CrawlerSettings,
) -> Result<Vec<String>, Absent> {
    let elements = page
        .find_all(&settings.detail_locator())
        .await
        .map_err(lookup)?;

    let mut blocks = Vec::with_capacity(elements.len());
    for element in elements {
        match element.text().await {
            Ok(text) => blocks.push(text),
            Err(e) => ::log::debug!("Skipping unreadable detail block: {}", e),
        }
    }
    Ok(blocks)
}

/// Value of the first detail block carrying `label`
pub async fn labelled_detail<P: PageClient>(
    page: &P,
    settings: &CrawlerSettings,
    label: &str,
) -> Extracted {
    let blocks = detail_blocks(page, settings).await?;
    fields::labelled_value(&blocks, label)
}

pub async fn website<P: PageClient>(page: &P, settings: &CrawlerSettings) -> Extracted {
    labelled_detail(page, settings, fields::WEBSITE_LABEL).await
}

pub async fn address<P: PageClient>(page: &P, settings: &CrawlerSettings) -> Extracted {
    labelled_detail(page, settings, fields::ADDRESS_LABEL).await
}
