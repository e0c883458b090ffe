use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

pub const DEFAULT_CHAT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "mistralai/mistral-7b-instruct";
pub const DEFAULT_JSEARCH_BASE_URL: &str = "https://jsearch.p.rapidapi.com";
pub const DEFAULT_JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";

/// Where job recommendations come from. Exactly one strategy runs per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSource {
    /// Ask the model for job titles.
    Llm,
    /// Static interest table joined with a live job-search API.
    Live,
}

impl FromStr for JobSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "llm" => Ok(JobSource::Llm),
            "live" => Ok(JobSource::Live),
            other => Err(anyhow!("unknown JOB_SOURCE '{other}' (expected 'llm' or 'live')")),
        }
    }
}

/// How the live job-search provider is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSearchMode {
    /// One search call per title; listings come back inline.
    Search,
    /// Search for listing ids, then fetch each listing's details.
    SearchThenDetails,
}

impl FromStr for JobSearchMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "search" => Ok(JobSearchMode::Search),
            "search_then_details" => Ok(JobSearchMode::SearchThenDetails),
            other => Err(anyhow!(
                "unknown JOB_SEARCH_MODE '{other}' (expected 'search' or 'search_then_details')"
            )),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Built once at startup and never mutated afterwards.
///
/// API keys are optional here: a missing key only shows up later as an
/// authentication failure from the remote service.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: String,
    pub chat_api_url: String,
    pub chat_model: String,
    pub jsearch_api_key: String,
    pub jsearch_base_url: String,
    pub jsearch_host: String,
    pub job_location: String,
    pub job_country: String,
    pub job_source: JobSource,
    pub job_search_mode: JobSearchMode,
    pub strict_category: bool,
    pub http_timeout_secs: u64,
    pub templates_dir: String,
    pub static_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openrouter_api_key: String::new(),
            chat_api_url: DEFAULT_CHAT_API_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            jsearch_api_key: String::new(),
            jsearch_base_url: DEFAULT_JSEARCH_BASE_URL.to_string(),
            jsearch_host: DEFAULT_JSEARCH_HOST.to_string(),
            job_location: "India".to_string(),
            job_country: "IN".to_string(),
            job_source: JobSource::Llm,
            job_search_mode: JobSearchMode::Search,
            strict_category: false,
            http_timeout_secs: 30,
            templates_dir: "templates".to_string(),
            static_dir: "static".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            openrouter_api_key: optional_env("OPENROUTER_API_KEY").unwrap_or_default(),
            chat_api_url: optional_env("CHAT_API_URL").unwrap_or(defaults.chat_api_url),
            chat_model: optional_env("CHAT_MODEL").unwrap_or(defaults.chat_model),
            jsearch_api_key: optional_env("JSEARCH_API_KEY").unwrap_or_default(),
            jsearch_base_url: optional_env("JSEARCH_BASE_URL")
                .unwrap_or(defaults.jsearch_base_url),
            jsearch_host: optional_env("JSEARCH_HOST").unwrap_or(defaults.jsearch_host),
            job_location: optional_env("JOB_LOCATION").unwrap_or(defaults.job_location),
            job_country: optional_env("JOB_COUNTRY").unwrap_or(defaults.job_country),
            job_source: parse_env("JOB_SOURCE", defaults.job_source)?,
            job_search_mode: parse_env("JOB_SEARCH_MODE", defaults.job_search_mode)?,
            strict_category: parse_env("STRICT_CATEGORY", defaults.strict_category)?,
            http_timeout_secs: parse_env("HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?,
            templates_dir: optional_env("TEMPLATES_DIR").unwrap_or(defaults.templates_dir),
            static_dir: optional_env("STATIC_DIR").unwrap_or(defaults.static_dir),
            port: parse_env("PORT", defaults.port)?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }

    /// Names of API keys that are unset for the configured job source.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.openrouter_api_key.is_empty() {
            missing.push("OPENROUTER_API_KEY");
        }
        if self.job_source == JobSource::Live && self.jsearch_api_key.is_empty() {
            missing.push("JSEARCH_API_KEY");
        }
        missing
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_source_parses_case_insensitively() {
        assert_eq!("LLM".parse::<JobSource>().unwrap(), JobSource::Llm);
        assert_eq!(" live ".parse::<JobSource>().unwrap(), JobSource::Live);
        assert!("static".parse::<JobSource>().is_err());
    }

    #[test]
    fn test_job_search_mode_parses() {
        assert_eq!(
            "search_then_details".parse::<JobSearchMode>().unwrap(),
            JobSearchMode::SearchThenDetails
        );
        assert_eq!("search".parse::<JobSearchMode>().unwrap(), JobSearchMode::Search);
        assert!("details".parse::<JobSearchMode>().is_err());
    }

    #[test]
    fn test_defaults_match_hosted_services() {
        let config = Config::default();
        assert_eq!(config.chat_model, "mistralai/mistral-7b-instruct");
        assert_eq!(config.job_location, "India");
        assert_eq!(config.http_timeout_secs, 30);
        assert_eq!(config.job_source, JobSource::Llm);
        assert!(!config.strict_category);
    }

    #[test]
    fn test_missing_keys_depends_on_job_source() {
        let mut config = Config::default();
        assert_eq!(config.missing_keys(), vec!["OPENROUTER_API_KEY"]);

        config.job_source = JobSource::Live;
        assert_eq!(
            config.missing_keys(),
            vec!["OPENROUTER_API_KEY", "JSEARCH_API_KEY"]
        );

        config.openrouter_api_key = "sk-test".to_string();
        config.jsearch_api_key = "rapid".to_string();
        assert!(config.missing_keys().is_empty());
    }
}
