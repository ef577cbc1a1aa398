pub mod business;
pub mod crawler;
pub mod fields;
pub mod harvest;
pub mod orchestrator;
pub mod web;

#[cfg(test)]
mod tests;

pub use crawler::{Locator, PageClient, PageElement, Readiness};
pub use orchestrator::{CrawlPhase, Crawler};
pub use web::WebDriverPage;
