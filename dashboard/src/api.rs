//! ==============================================================================
//! api.rs - fetch client for the campaign api
//! ==============================================================================

use gloo_net::http::{Request, Response};
use shared::{
    ApiConfig, ApiError, Campaign, CampaignApi, CampaignStatus, Credentials, ErrorBody,
    LoginResponse, NewCampaign, StatusUpdate, Summary,
};

#[derive(Debug, Clone)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

// ==============================================================================
// helpers
// ==============================================================================

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn decode(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

/// turns a non-2xx response into `ApiError::Rejected`, keeping its `error` text
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error);
    Err(ApiError::Rejected { status, message })
}

// ==============================================================================
// API functions
// ==============================================================================

impl CampaignApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response = Request::post(&self.config.login_url())
            .json(credentials)
            .map_err(decode)?
            .send()
            .await
            .map_err(network)?;

        check(response).await?.json::<LoginResponse>().await.map_err(decode)
    }

    async fn list_campaigns(&self, query: &str) -> Result<Vec<Campaign>, ApiError> {
        let response = Request::get(&self.config.campaigns_url())
            .query([("q", query)])
            .send()
            .await
            .map_err(network)?;

        check(response).await?.json::<Vec<Campaign>>().await.map_err(decode)
    }

    async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign, ApiError> {
        let response = Request::post(&self.config.campaigns_url())
            .json(campaign)
            .map_err(decode)?
            .send()
            .await
            .map_err(network)?;

        check(response).await?.json::<Campaign>().await.map_err(decode)
    }

    async fn update_status(&self, id: &str, status: CampaignStatus) -> Result<(), ApiError> {
        let response = Request::patch(&self.config.campaign_status_url(id))
            .json(&StatusUpdate { status })
            .map_err(decode)?
            .send()
            .await
            .map_err(network)?;

        check(response).await.map(|_| ())
    }

    async fn delete_campaign(&self, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.config.campaign_url(id))
            .send()
            .await
            .map_err(network)?;

        check(response).await.map(|_| ())
    }

    async fn summary(&self) -> Result<Summary, ApiError> {
        let response = Request::get(&self.config.summary_url())
            .send()
            .await
            .map_err(network)?;

        check(response).await?.json::<Summary>().await.map_err(decode)
    }
}
