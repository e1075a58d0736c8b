use std::env;

pub const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// Where route requests go. `OSRM_BASE_URL` lets a self-hosted instance
/// stand in for the public router, in tests or otherwise.
#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
}

impl OsrmConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("OSRM_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
