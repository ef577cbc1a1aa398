use super::fake::{FakeBrowser, FakePageState, business_page, fast_settings};
use crate::crawlers::business::extract_business;
use crate::error::CrawlError;
use crate::results::{BusinessRecord, NOT_AVAILABLE};

const PAGE: &str = "https://www.oneflare.com.au/b/acme-cooling";

#[tokio::test]
async fn test_complete_record() {
    let settings = fast_settings("https://www.oneflare.com.au/air-conditioning");
    let browser = FakeBrowser::new().with_page(PAGE, business_page(&settings, "Acme Cooling"));

    let record = extract_business(&browser, &settings, PAGE).await.unwrap();
    assert_eq!(
        record,
        BusinessRecord {
            business_name: "Acme Cooling".to_string(),
            jobs_completed: "1234".to_string(),
            phone_number: "0400 123 456".to_string(),
            website_url: "https://acme.test".to_string(),
            address: "1 Main St".to_string(),
            url: PAGE.to_string(),
        }
    );
}

#[tokio::test]
async fn test_blank_page_gives_placeholders() {
    let settings = fast_settings("https://www.oneflare.com.au/air-conditioning");
    let browser = FakeBrowser::new().with_page(PAGE, FakePageState::new());

    let record = extract_business(&browser, &settings, PAGE).await.unwrap();
    for value in [
        &record.business_name,
        &record.jobs_completed,
        &record.phone_number,
        &record.website_url,
        &record.address,
    ] {
        assert_eq!(value, NOT_AVAILABLE);
    }
    assert_eq!(record.url, PAGE);
}

#[tokio::test]
async fn test_repeat_extraction_is_identical() {
    let settings = fast_settings("https://www.oneflare.com.au/air-conditioning");
    let browser = FakeBrowser::new().with_page(PAGE, business_page(&settings, "Acme Cooling"));

    let first = extract_business(&browser, &settings, PAGE).await.unwrap();
    let second = extract_business(&browser, &settings, PAGE).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_navigation_failure_is_an_error() {
    let settings = fast_settings("https://www.oneflare.com.au/air-conditioning");
    let browser = FakeBrowser::new().with_broken_page(PAGE);

    let err = extract_business(&browser, &settings, PAGE).await.unwrap_err();
    assert!(matches!(err, CrawlError::Navigation { .. }));
    assert!(err.to_string().contains(PAGE));
}

#[tokio::test]
async fn test_lost_session_is_an_error() {
    let settings = fast_settings("https://www.oneflare.com.au/air-conditioning");
    let browser = FakeBrowser::new()
        .with_lost_session_on(PAGE, business_page(&settings, "Acme Cooling"));

    let err = extract_business(&browser, &settings, PAGE).await.unwrap_err();
    assert!(matches!(err, CrawlError::Driver(_)));
}
