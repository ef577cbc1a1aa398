use crate::config::CrawlerSettings;
use crate::crawlers::crawler::{PageClient, PageElement, Readiness};
use crate::error::{CrawlError, Result};
use crate::utils::pause;
use url::Url;

/// Collects the business page URLs listed on the category page
///
/// Links come back in document order and are not deduplicated. Elements
/// without an `href` are skipped. An empty list is a valid result; only a
/// failure to load the category page or to query it is an error.
pub async fn harvest_links<P: PageClient>(
    page: &P,
    settings: &CrawlerSettings,
) -> Result<Vec<String>> {
    ::log::info!("Loading category page {}", settings.category_url);
    page.navigate(&settings.category_url)
        .await
        .map_err(|e| CrawlError::navigation(&settings.category_url, e))?;

    // Listings are rendered client side, well after the document itself loads
    pause(settings.preload_delay, "category page assets").await;

    let locator = settings.links_locator();
    match page.wait_for(&locator, settings.wait_timeout()).await? {
        Readiness::Ready => ::log::debug!("Business links present ({})", locator),
        Readiness::TimedOut => ::log::warn!("Timeout while waiting for business links."),
    }

    let base = Url::parse(&settings.category_url).ok();
    let elements = page.find_all(&locator).await?;
    let mut links = Vec::with_capacity(elements.len());

    for element in elements {
        match element.href().await {
            Ok(Some(href)) if !href.trim().is_empty() => {
                links.push(resolve_link(base.as_ref(), href.trim()));
            }
            Ok(_) => ::log::debug!("Skipping business link without href"),
            Err(e) => ::log::debug!("Could not read business link href: {}", e),
        }
    }

    ::log::debug!(
        "First few links: {:?}",
        links.iter().take(5).collect::<Vec<_>>()
    );
    Ok(links)
}

/// Resolves `href` against the category page; unresolvable links are kept as-is
fn resolve_link(base: Option<&Url>, href: &str) -> String {
    match base.map(|base| base.join(href)) {
        Some(Ok(resolved)) => resolved.to_string(),
        _ => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_link() {
        let base = Url::parse("https://www.oneflare.com.au/air-conditioning").unwrap();

        assert_eq!(
            resolve_link(Some(&base), "/b/cool-air-co"),
            "https://www.oneflare.com.au/b/cool-air-co"
        );
        assert_eq!(
            resolve_link(Some(&base), "https://other.test/b/1"),
            "https://other.test/b/1"
        );
        assert_eq!(resolve_link(None, "/b/cool-air-co"), "/b/cool-air-co");
    }
}
