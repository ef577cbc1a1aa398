use serde::{Deserialize, Serialize};

/// Placeholder for a field that was not found or was empty
pub const NOT_AVAILABLE: &str = "N/A";

/// One exported row: the details of a single business profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub business_name: String,

    /// Digits only, or the placeholder
    pub jobs_completed: String,

    pub phone_number: String,

    pub website_url: String,

    pub address: String,

    /// Business page the record was read from
    pub url: String,
}

impl BusinessRecord {
    /// Column order of the exported table
    pub const COLUMNS: [&'static str; 6] = [
        "business_name",
        "jobs_completed",
        "phone_number",
        "website_url",
        "address",
        "url",
    ];

    /// The record's values in [`BusinessRecord::COLUMNS`] order
    pub fn as_row(&self) -> [&str; 6] {
        [
            &self.business_name,
            &self.jobs_completed,
            &self.phone_number,
            &self.website_url,
            &self.address,
            &self.url,
        ]
    }
}

/// A URL that was dropped from the results, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedUrl {
    pub url: String,
    pub reason: String,
}

/// Outcome of a crawl run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlReport {
    /// Records in harvest order
    pub records: Vec<BusinessRecord>,

    /// Number of business links found on the category page
    pub links_found: usize,

    /// URLs whose extraction failed
    pub skipped: Vec<SkippedUrl>,
}

impl CrawlReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
