//! ==============================================================================
//! models.rs - wire types exchanged with the campaign api
//! ==============================================================================
//!
//! every type here mirrors a json body of the campaign tracker api.
//! field names follow the api (`_id`, `startDate`), rust names stay snake_case.
//!
//! ==============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ==============================================================================
// campaign status
// ==============================================================================

/// lifecycle status of a campaign
///
/// the api stores the label verbatim; labels read back from it are trimmed
/// before matching, so `" Paused "` still parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum CampaignStatus {
    #[default]
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    /// all statuses in the order the selector lists them
    pub const ALL: [CampaignStatus; 3] = [
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Completed => "Completed",
        }
    }

    /// colour class applied to the status selector
    pub fn css_class(self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown campaign status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for CampaignStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Active" => Ok(CampaignStatus::Active),
            "Paused" => Ok(CampaignStatus::Paused),
            "Completed" => Ok(CampaignStatus::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for CampaignStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// status text exactly as the api returned it
///
/// the api does not validate labels on create, so a row may carry one that
/// matches no [`CampaignStatus`]. such rows still decode and render, with no
/// option selected and no colour class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusLabel(String);

impl StatusLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// the known status this label names, after trimming
    pub fn status(&self) -> Option<CampaignStatus> {
        self.0.parse().ok()
    }
}

impl From<CampaignStatus> for StatusLabel {
    fn from(status: CampaignStatus) -> Self {
        Self(status.label().to_string())
    }
}

// ==============================================================================
// campaigns
// ==============================================================================

/// campaign as returned by `GET /campaigns` and `POST /campaigns`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    /// opaque server identifier
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub client: String,
    /// iso date, e.g. "2024-01-01"
    #[serde(rename = "startDate")]
    pub start_date: String,
    pub status: StatusLabel,
}

/// body of `POST /campaigns`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCampaign {
    pub name: String,
    pub client: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    pub status: CampaignStatus,
}

/// body of `PATCH /campaigns/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: CampaignStatus,
}

/// aggregate counts from `GET /summary`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total: u64,
    pub active: u64,
    pub paused: u64,
    pub completed: u64,
}

// ==============================================================================
// auth
// ==============================================================================

/// body of `POST /login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// builds credentials from raw input, trimming both fields
    pub fn from_input(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// error body the api attaches to non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_uses_api_field_names() {
        let json = r#"{"_id":"1","name":"Launch","client":"Acme","startDate":"2024-01-01","status":"Active"}"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.id, "1");
        assert_eq!(campaign.start_date, "2024-01-01");
        assert_eq!(campaign.status.status(), Some(CampaignStatus::Active));
    }

    #[test]
    fn test_status_is_trimmed_on_read() {
        let json = r#"{"_id":"9","name":"n","client":"c","startDate":"2024-02-02","status":" Paused "}"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.status.status(), Some(CampaignStatus::Paused));
    }

    #[test]
    fn test_list_keeps_rows_with_unknown_status() {
        let json = r#"[
            {"_id":"1","name":"Launch","client":"Acme","startDate":"2024-01-01","status":"Active"},
            {"_id":"2","name":"Teaser","client":"Acme","startDate":"2024-01-02","status":"active"}
        ]"#;
        let campaigns: Vec<Campaign> = serde_json::from_str(json).unwrap();
        assert_eq!(campaigns.len(), 2);
        assert_eq!(campaigns[0].status.status(), Some(CampaignStatus::Active));
        assert_eq!(campaigns[1].status.as_str(), "active");
        assert_eq!(campaigns[1].status.status(), None);
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert_eq!(
            "Archived".parse::<CampaignStatus>(),
            Err(UnknownStatus("Archived".to_string()))
        );
    }

    #[test]
    fn test_new_campaign_body() {
        let body = NewCampaign {
            name: "Launch".into(),
            client: "Acme".into(),
            start_date: "2024-01-01".into(),
            status: CampaignStatus::Completed,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"startDate\":\"2024-01-01\""));
        assert!(json.contains("\"status\":\"Completed\""));
    }

    #[test]
    fn test_credentials_trimmed() {
        let creds = Credentials::from_input("  admin ", "1234 ");
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "1234");
    }

    #[test]
    fn test_error_body_without_error_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);
    }

    #[test]
    fn test_css_class_mapping() {
        assert_eq!(CampaignStatus::Active.css_class(), "active");
        assert_eq!(CampaignStatus::Paused.css_class(), "paused");
        assert_eq!(CampaignStatus::Completed.css_class(), "completed");
    }
}
