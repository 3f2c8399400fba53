//! ==============================================================================
//! config.rs - client configuration
//! ==============================================================================
//!
//! the api base url is baked in at build time. set `CAMPAIGN_API_BASE` when
//! compiling the dashboard to point it at another deployment.
//!
//! ==============================================================================

/// hosted api used when no override is given
pub const DEFAULT_API_BASE: &str = "https://campaign-tracker-qyql.onrender.com/api";

/// quiet period before a search keystroke triggers a reload
pub const SEARCH_DEBOUNCE_MS: u32 = 400;

/// local storage key holding the session flag
pub const SESSION_STORAGE_KEY: &str = "loggedIn";

/// endpoint layout of the campaign api
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `CAMPAIGN_API_BASE` at build time, else [`DEFAULT_API_BASE`]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CAMPAIGN_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    pub fn campaigns_url(&self) -> String {
        format!("{}/campaigns", self.base_url)
    }

    pub fn campaign_url(&self, id: &str) -> String {
        format!("{}/campaigns/{}", self.base_url, id)
    }

    pub fn campaign_status_url(&self, id: &str) -> String {
        format!("{}/campaigns/{}/status", self.base_url, id)
    }

    pub fn summary_url(&self) -> String {
        format!("{}/summary", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
