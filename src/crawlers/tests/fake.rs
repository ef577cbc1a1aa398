//! In-memory page client with canned pages, for driving the pipeline without a browser.

use crate::config::CrawlerSettings;
use crate::crawlers::crawler::{Locator, PageClient, PageElement, Readiness};
use crate::error::DriverError;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Settings pointing at `category_url` with every delay disabled
pub fn fast_settings(category_url: &str) -> CrawlerSettings {
    CrawlerSettings::new(category_url)
        .unwrap()
        .with_delays(0.0, 0.0)
        .with_reveal_delay(0.0)
        .with_wait_timeout(0.1)
}

#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    text: String,
    href: Option<String>,
    revealed_text: Option<String>,
    click_fails: bool,
    text_fails: bool,
    revealed: Arc<AtomicBool>,
    clicks: Arc<AtomicUsize>,
}

impl FakeElement {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn link(href: &str) -> Self {
        Self {
            href: Some(href.to_string()),
            ..Self::default()
        }
    }

    /// Element whose text changes to `revealed` once clicked
    pub fn revealing(text: &str, revealed: &str) -> Self {
        Self {
            revealed_text: Some(revealed.to_string()),
            ..Self::with_text(text)
        }
    }

    pub fn unclickable(mut self) -> Self {
        self.click_fails = true;
        self
    }

    pub fn unreadable(mut self) -> Self {
        self.text_fails = true;
        self
    }

    pub fn clicks(&self) -> usize {
        self.clicks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageElement for FakeElement {
    async fn text(&self) -> Result<String, DriverError> {
        if self.text_fails {
            return Err(DriverError::Command("stale element reference".to_string()));
        }
        match &self.revealed_text {
            Some(revealed) if self.revealed.load(Ordering::SeqCst) => Ok(revealed.clone()),
            _ => Ok(self.text.clone()),
        }
    }

    async fn href(&self) -> Result<Option<String>, DriverError> {
        Ok(self.href.clone())
    }

    async fn click(&self) -> Result<(), DriverError> {
        self.clicks.fetch_add(1, Ordering::SeqCst);
        if self.click_fails {
            return Err(DriverError::NotInteractable(
                "element click intercepted".to_string(),
            ));
        }
        self.revealed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Elements on one fake page, keyed by locator
#[derive(Debug, Clone, Default)]
pub struct FakePageState {
    elements: HashMap<Locator, Vec<FakeElement>>,
}

impl FakePageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, locator: Locator, elements: Vec<FakeElement>) -> Self {
        self.elements.entry(locator).or_default().extend(elements);
        self
    }
}

/// A browser that serves canned pages
#[derive(Default)]
pub struct FakeBrowser {
    pages: HashMap<String, FakePageState>,
    broken: HashSet<String>,
    broken_waits: HashSet<String>,
    current: Mutex<Option<String>>,
    visited: Mutex<Vec<String>>,
    closed: AtomicBool,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, state: FakePageState) -> Self {
        self.pages.insert(url.to_string(), state);
        self
    }

    /// Navigating to `url` fails
    pub fn with_broken_page(mut self, url: &str) -> Self {
        self.broken.insert(url.to_string());
        self
    }

    /// Navigation to `url` works, but the session dies while waiting on it
    pub fn with_lost_session_on(mut self, url: &str, state: FakePageState) -> Self {
        self.broken_waits.insert(url.to_string());
        self.with_page(url, state)
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn current_url(&self) -> Option<String> {
        self.current.lock().unwrap().clone()
    }

    fn matching(&self, locator: &Locator) -> Vec<FakeElement> {
        self.current_url()
            .and_then(|url| self.pages.get(&url))
            .and_then(|page| page.elements.get(locator))
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl PageClient for FakeBrowser {
    type Element = FakeElement;

    async fn navigate(&self, url: &str) -> Result<(), DriverError> {
        self.visited.lock().unwrap().push(url.to_string());
        if self.broken.contains(url) {
            return Err(DriverError::Command(
                "unknown error: net::ERR_NAME_NOT_RESOLVED".to_string(),
            ));
        }
        *self.current.lock().unwrap() = Some(url.to_string());
        Ok(())
    }

    async fn wait_for(
        &self,
        locator: &Locator,
        _timeout: Duration,
    ) -> Result<Readiness, DriverError> {
        if let Some(url) = self.current_url() {
            if self.broken_waits.contains(&url) {
                return Err(DriverError::Command("invalid session id".to_string()));
            }
        }
        if self.matching(locator).is_empty() {
            Ok(Readiness::TimedOut)
        } else {
            Ok(Readiness::Ready)
        }
    }

    async fn find(&self, locator: &Locator) -> Result<Option<Self::Element>, DriverError> {
        Ok(self.matching(locator).into_iter().next())
    }

    async fn find_all(&self, locator: &Locator) -> Result<Vec<Self::Element>, DriverError> {
        Ok(self.matching(locator))
    }

    async fn close(&self) -> Result<(), DriverError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// A complete business page for `settings`' locators
pub fn business_page(settings: &CrawlerSettings, name: &str) -> FakePageState {
    FakePageState::new()
        .with(settings.name_locator(), vec![FakeElement::with_text(name)])
        .with(
            settings.jobs_locator(),
            vec![FakeElement::with_text("1,234 jobs completed")],
        )
        .with(
            settings.phone_locator(),
            vec![FakeElement::revealing("Show number", "0400 123 456")],
        )
        .with(
            settings.detail_locator(),
            vec![
                FakeElement::with_text("Hours: 9-5"),
                FakeElement::with_text("Website: https://acme.test"),
                FakeElement::with_text("Address: 1 Main St"),
            ],
        )
}

/// A category page listing `hrefs`
pub fn category_page(settings: &CrawlerSettings, hrefs: &[&str]) -> FakePageState {
    FakePageState::new().with(
        settings.links_locator(),
        hrefs.iter().map(|href| FakeElement::link(href)).collect(),
    )
}
