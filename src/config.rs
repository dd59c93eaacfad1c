//! Configuration for the submission endpoints
//!
//! Everything is read from the environment (a `.env` file is honored
//! when present) so credentials stay out of the binary.

use anyhow::{Context, Result};

const DEFAULT_TABLE: &str = "job_requests";
const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";

/// Endpoint locations and credentials, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the data store, e.g. `https://xyzcompany.supabase.co`
    pub supabase_url: String,
    /// Service key, sent as both `apikey` and bearer token
    pub supabase_key: String,
    /// Table receiving submitted requests
    pub supabase_table: String,
    /// Bot token used for the channel notification
    pub telegram_token: String,
    /// Chat or channel the notification is posted to
    pub telegram_chat_id: String,
    /// Bot API host, overridable for testing
    pub telegram_api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            supabase_url: require_env("SUPABASE_URL").map(normalize_base)?,
            supabase_key: require_env("SUPABASE_KEY")?,
            supabase_table: std::env::var("SUPABASE_TABLE")
                .unwrap_or_else(|_| DEFAULT_TABLE.to_string()),
            telegram_token: require_env("TELEGRAM_TOKEN")?,
            telegram_chat_id: require_env("TELEGRAM_CHAT_ID")?,
            telegram_api_base: std::env::var("TELEGRAM_API_BASE")
                .map(normalize_base)
                .unwrap_or_else(|_| DEFAULT_TELEGRAM_API.to_string()),
        })
    }

    /// REST endpoint rows are inserted into
    pub fn store_endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.supabase_url, self.supabase_table)
    }

    /// Bot endpoint the notification message is posted to
    pub fn notify_endpoint(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.telegram_api_base, self.telegram_token
        )
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn normalize_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            supabase_url: "https://example.supabase.co".to_string(),
            supabase_key: "service-key".to_string(),
            supabase_table: "job_requests".to_string(),
            telegram_token: "123:abc".to_string(),
            telegram_chat_id: "@hiring".to_string(),
            telegram_api_base: "https://api.telegram.org".to_string(),
        }
    }

    #[test]
    fn test_store_endpoint() {
        assert_eq!(
            config().store_endpoint(),
            "https://example.supabase.co/rest/v1/job_requests"
        );
    }

    #[test]
    fn test_notify_endpoint() {
        assert_eq!(
            config().notify_endpoint(),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_normalize_base_strips_trailing_slashes() {
        assert_eq!(
            normalize_base("https://example.supabase.co/".to_string()),
            "https://example.supabase.co"
        );
        assert_eq!(
            normalize_base("https://example.supabase.co".to_string()),
            "https://example.supabase.co"
        );
    }
}
