//! JSearch (RapidAPI) provider.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::JobSearchMode;
use crate::job_search::{JobListing, JobSearch, JobSearchError, MAX_RESULTS_PER_TITLE};

#[derive(Debug, Deserialize)]
struct JSearchResponse {
    #[serde(default)]
    data: Vec<JSearchJob>,
}

#[derive(Debug, Deserialize)]
struct JSearchJob {
    #[serde(default)]
    job_id: Option<String>,
    #[serde(default)]
    job_title: Option<String>,
    #[serde(default)]
    employer_name: Option<String>,
    #[serde(default)]
    job_city: Option<String>,
}

impl JSearchJob {
    fn into_listing(self) -> Option<JobListing> {
        let title = non_blank(self.job_title)?;
        Some(JobListing {
            title,
            company: non_blank(self.employer_name),
            city: non_blank(self.job_city),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    base_url: String,
    api_key: String,
    host: String,
    country: String,
    mode: JobSearchMode,
}

impl JSearchClient {
    pub fn new(
        base_url: String,
        api_key: String,
        host: String,
        country: String,
        mode: JobSearchMode,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for job search")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            host,
            country,
            mode,
        })
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<JSearchResponse, JobSearchError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobSearchError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn search_jobs(&self, title: &str, location: &str) -> Result<Vec<JSearchJob>, JobSearchError> {
        let response = self
            .get(
                "/search",
                &[
                    ("query", title),
                    ("num_pages", "1"),
                    ("location", location),
                    ("country", self.country.as_str()),
                    ("language", "en"),
                ],
            )
            .await?;

        debug!(title, results = response.data.len(), "JSearch search returned");
        Ok(response.data)
    }

    /// Fetches one listing by id. `None` when the provider knows no such listing.
    async fn job_details(&self, job_id: &str) -> Result<Option<JobListing>, JobSearchError> {
        let response = self
            .get("/job-details", &[("job_id", job_id), ("country", self.country.as_str())])
            .await?;

        Ok(response.data.into_iter().next().and_then(JSearchJob::into_listing))
    }
}

#[async_trait]
impl JobSearch for JSearchClient {
    async fn search(&self, title: &str, location: &str) -> Result<Vec<JobListing>, JobSearchError> {
        let jobs = self.search_jobs(title, location).await?;

        match self.mode {
            JobSearchMode::Search => Ok(jobs
                .into_iter()
                .take(MAX_RESULTS_PER_TITLE)
                .filter_map(JSearchJob::into_listing)
                .collect()),
            JobSearchMode::SearchThenDetails => {
                let ids: Vec<String> = jobs
                    .into_iter()
                    .filter_map(|j| non_blank(j.job_id))
                    .take(MAX_RESULTS_PER_TITLE)
                    .collect();

                // A failed detail call drops that listing only.
                let mut listings = Vec::with_capacity(ids.len());
                for id in &ids {
                    match self.job_details(id).await {
                        Ok(Some(listing)) => listings.push(listing),
                        Ok(None) => debug!(job_id = %id, "No details for listing"),
                        Err(e) => warn!(job_id = %id, "Job detail lookup failed: {e}"),
                    }
                }
                Ok(listings)
            }
        }
    }
}
