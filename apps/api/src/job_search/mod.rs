//! Job Search: live listings from a third-party job board.
//!
//! Providers sit behind the `JobSearch` trait so the recommender never knows
//! which board it is talking to. Default provider: JSearch (RapidAPI).

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub mod jsearch;

pub use jsearch::JSearchClient;

/// Listings kept per searched title.
pub const MAX_RESULTS_PER_TITLE: usize = 5;

/// Placeholder for listing fields the provider left empty.
const UNKNOWN_FIELD: &str = "Unknown";

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("job search API returned status {status}")]
    Api { status: u16 },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single listing reduced to the fields we display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobListing {
    pub title: String,
    pub company: Option<String>,
    pub city: Option<String>,
}

impl JobListing {
    /// `"{title} at {company} ({city})"`
    pub fn display(&self) -> String {
        format!(
            "{} at {} ({})",
            self.title,
            self.company.as_deref().unwrap_or(UNKNOWN_FIELD),
            self.city.as_deref().unwrap_or(UNKNOWN_FIELD)
        )
    }
}

/// A job board we can query by title and location.
#[async_trait]
pub trait JobSearch: Send + Sync {
    /// Returns at most [`MAX_RESULTS_PER_TITLE`] listings for `title`.
    async fn search(&self, title: &str, location: &str) -> Result<Vec<JobListing>, JobSearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_title_company_city() {
        let listing = JobListing {
            title: "Backend Developer".to_string(),
            company: Some("Acme".to_string()),
            city: Some("Pune".to_string()),
        };
        assert_eq!(listing.display(), "Backend Developer at Acme (Pune)");
    }

    #[test]
    fn test_display_fills_missing_fields() {
        let listing = JobListing {
            title: "Composer".to_string(),
            company: None,
            city: None,
        };
        assert_eq!(listing.display(), "Composer at Unknown (Unknown)");
    }
}
