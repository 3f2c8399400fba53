//! ==============================================================================
//! api.rs - the campaign api as seen by the controller
//! ==============================================================================
//!
//! the browser build implements this over fetch (dashboard/src/api.rs).
//! tests implement it with a recording fake.
//!
//! ```text
//!     POST   /login                  {username, password}
//!     GET    /campaigns?q=<text>     -> [Campaign]
//!     POST   /campaigns              {name, client, startDate, status} -> Campaign
//!     PATCH  /campaigns/{id}/status  {status}
//!     DELETE /campaigns/{id}
//!     GET    /summary                -> {total, active, paused, completed}
//! ```
//!
//! ==============================================================================

use crate::error::ApiError;
use crate::models::{Campaign, CampaignStatus, Credentials, LoginResponse, NewCampaign, Summary};

// single threaded wasm; futures are never sent across threads
#[allow(async_fn_in_trait)]
pub trait CampaignApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// empty `query` lists every campaign
    async fn list_campaigns(&self, query: &str) -> Result<Vec<Campaign>, ApiError>;

    async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign, ApiError>;

    async fn update_status(&self, id: &str, status: CampaignStatus) -> Result<(), ApiError>;

    async fn delete_campaign(&self, id: &str) -> Result<(), ApiError>;

    async fn summary(&self) -> Result<Summary, ApiError>;
}
