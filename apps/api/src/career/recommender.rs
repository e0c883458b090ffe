//! Job Recommender: pluggable strategy that turns normalized interests into
//! job recommendations.
//!
//! `LlmJobRecommender`: asks the model for titles and cleans the reply.
//! `LiveJobRecommender`: static interest → title table, then live listings.
//!
//! `AppState` holds an `Arc<dyn JobRecommender>` chosen at startup via `JOB_SOURCE`.
//! Neither strategy fails: problems are logged and degrade to fewer jobs.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::career::prompts::{join_interests, JOB_TITLES_PROMPT_TEMPLATE, JOB_TITLES_SYSTEM_TEMPLATE};
use crate::job_search::JobSearch;
use crate::llm_client::LlmClient;

/// Shown in place of an empty recommendation list.
pub const NO_JOBS_FALLBACK: &str = "No jobs found right now. Try another query.";

/// Candidate titles per canonical interest.
const INTEREST_TO_JOBS: &[(&str, &[&str])] = &[
    // STEM / Tech
    (
        "coding",
        &["Software Engineer", "Backend Developer", "Full Stack Developer", "Data Analyst"],
    ),
    (
        "dashboards",
        &["Data Analyst", "BI Developer", "Dashboard Developer", "UI/UX Designer"],
    ),
    (
        "programming",
        &["Software Engineer", "Mobile App Developer", "Data Engineer"],
    ),
    // Arts
    (
        "painting",
        &["Graphic Designer", "Illustrator", "Animator", "Art Teacher"],
    ),
    ("music", &["Music Teacher", "Composer", "Sound Designer", "Performer"]),
    // Sports
    ("football", &["Football Coach", "Sports Analyst", "Physical Trainer"]),
    ("fitness", &["Personal Trainer", "Fitness Coach", "Yoga Instructor"]),
    (
        "basketball",
        &["Basketball Coach", "Sports Analyst", "Athletic Trainer"],
    ),
];

#[async_trait]
pub trait JobRecommender: Send + Sync {
    /// Recommendations for the given interests. Never empty: falls back to
    /// [`NO_JOBS_FALLBACK`].
    async fn recommend(&self, interests: &[String]) -> Vec<String>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

/// Removes repeats, keeping each item's first occurrence in place.
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

fn or_fallback(jobs: Vec<String>) -> Vec<String> {
    if jobs.is_empty() {
        vec![NO_JOBS_FALLBACK.to_string()]
    } else {
        jobs
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmJobRecommender
// ────────────────────────────────────────────────────────────────────────────

/// Cleans a comma-separated title list from the model.
///
/// Drops newlines, hyphens and periods, splits on commas, trims, discards empties.
pub fn clean_job_titles(raw: &str) -> Vec<String> {
    raw.replace('\n', "")
        .replace('-', "")
        .replace('.', "")
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct LlmJobRecommender {
    llm: LlmClient,
    location: String,
}

impl LlmJobRecommender {
    pub fn new(llm: LlmClient, location: String) -> Self {
        Self { llm, location }
    }

    fn prompts(&self, interests: &[String]) -> (String, String) {
        let system = JOB_TITLES_SYSTEM_TEMPLATE.replace("{location}", &self.location);
        let prompt = JOB_TITLES_PROMPT_TEMPLATE
            .replace("{location}", &self.location)
            .replace("{interests}", &join_interests(interests));
        (system, prompt)
    }
}

#[async_trait]
impl JobRecommender for LlmJobRecommender {
    async fn recommend(&self, interests: &[String]) -> Vec<String> {
        let (system, prompt) = self.prompts(interests);

        let titles = match self.llm.complete(&system, &prompt).await {
            Ok(raw) => dedup_preserving_order(clean_job_titles(&raw)),
            Err(e) => {
                warn!("Job title generation failed: {e}");
                Vec::new()
            }
        };

        info!(count = titles.len(), "Model suggested job titles");
        or_fallback(titles)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LiveJobRecommender
// ────────────────────────────────────────────────────────────────────────────

/// Table titles for one interest. Unknown interests have none.
pub fn titles_for(interest: &str) -> &'static [&'static str] {
    INTEREST_TO_JOBS
        .iter()
        .find(|(key, _)| *key == interest)
        .map(|(_, titles)| *titles)
        .unwrap_or(&[])
}

/// All candidate titles, interest by interest, in table order. Repeats are kept.
pub fn candidate_titles(interests: &[String]) -> Vec<&'static str> {
    interests
        .iter()
        .flat_map(|interest| titles_for(interest).iter().copied())
        .collect()
}

pub struct LiveJobRecommender {
    search: Arc<dyn JobSearch>,
    location: String,
}

impl LiveJobRecommender {
    pub fn new(search: Arc<dyn JobSearch>, location: String) -> Self {
        Self { search, location }
    }
}

#[async_trait]
impl JobRecommender for LiveJobRecommender {
    async fn recommend(&self, interests: &[String]) -> Vec<String> {
        let titles = candidate_titles(interests);
        debug!(?titles, "Candidate job titles");

        // One request at a time, in title order.
        let mut all_jobs = Vec::new();
        for title in titles {
            match self.search.search(title, &self.location).await {
                Ok(listings) => all_jobs.extend(listings.iter().map(|l| l.display())),
                Err(e) => warn!(title, "Job search failed: {e}"),
            }
        }

        let jobs = dedup_preserving_order(all_jobs);
        info!(count = jobs.len(), "Live job listings collected");
        or_fallback(jobs)
    }

    fn backend(&self) -> &'static str {
        "live"
    }
}
