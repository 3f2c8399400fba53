//! ==============================================================================
//! controller.rs - client view controller
//! ==============================================================================
//!
//! purpose:
//!     the operations a user can trigger: login, logout, loading campaigns
//!     and summary, adding, changing status, and two-step deletion.
//!
//! relationships:
//!     - talks to: any CampaignApi (fetch in the browser, a fake in tests)
//!     - mutates: AppState through a ViewHost
//!     - called by: dashboard components
//!
//! rules:
//!     - state is never borrowed across an await
//!     - every mutation that can move counts re-fetches list and summary
//!     - status and delete failures are logged, not shown
//!
//! ==============================================================================

use std::future::Future;

use crate::api::CampaignApi;
use crate::debounce::{Debouncer, Scheduler};
use crate::models::{CampaignStatus, Credentials};
use crate::state::AppState;

/// shown under the login form when the server gives no reason
pub const LOGIN_FALLBACK_ERROR: &str = "Invalid credentials";

/// alerted when adding fails without a server reason
pub const ADD_FALLBACK_ERROR: &str = "Error adding campaign";

// ==============================================================================
// host seam
// ==============================================================================

/// environment the controller drives: state store, alerts, session flag
pub trait ViewHost {
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R;

    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;

    /// blocking alert
    fn alert(&self, message: &str);

    /// persists or clears the `loggedIn` flag
    fn set_session_flag(&self, logged_in: bool);

    /// runs `task` to completion on the event loop
    fn spawn(&self, task: impl Future<Output = ()> + 'static);
}

// ==============================================================================
// controller
// ==============================================================================

#[derive(Debug, Clone)]
pub struct Controller<A, H> {
    api: A,
    host: H,
}

impl<A: CampaignApi, H: ViewHost> Controller<A, H> {
    pub fn new(api: A, host: H) -> Self {
        Self { api, host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// forces the login view whatever was stored before
    pub fn page_loaded(&self) {
        self.host.set_session_flag(false);
        self.host.update(AppState::reset_for_page_load);
    }

    // --------------------------------------------------------------------------
    // session
    // --------------------------------------------------------------------------

    pub async fn login(&self, credentials: Credentials) {
        self.host.update(|s| s.login.error.clear());

        match self.api.login(&credentials).await {
            Ok(_) => {
                log::info!("logged in as {}", credentials.username);
                self.host.set_session_flag(true);
                self.host.update(AppState::enter_main_view);
                self.refresh().await;
            }
            Err(e) => {
                log::warn!("login failed: {}", e);
                let message = e.server_message().unwrap_or(LOGIN_FALLBACK_ERROR).to_string();
                self.host.update(|s| s.login.error = message);
            }
        }
    }

    pub fn logout(&self) {
        log::info!("logged out");
        self.host.set_session_flag(false);
        self.host.update(AppState::enter_login_view);
    }

    // --------------------------------------------------------------------------
    // loading
    // --------------------------------------------------------------------------

    pub async fn load_campaigns(&self, query: &str) {
        let ticket = self.host.update(AppState::begin_campaign_load);
        log::debug!("loading campaigns, query {:?}", query);

        match self.api.list_campaigns(query).await {
            Ok(campaigns) => {
                let count = campaigns.len();
                if self.host.update(|s| s.finish_campaign_load(ticket, campaigns)) {
                    log::debug!("rendered {} campaigns", count);
                } else {
                    log::debug!("dropped stale campaign list for {:?}", query);
                }
            }
            Err(e) => log::error!("loading campaigns failed: {}", e),
        }
    }

    /// reloads the table with the current search text
    pub async fn reload_campaigns(&self) {
        let query = self.host.read(|s| s.search.clone());
        self.load_campaigns(&query).await;
    }

    pub async fn load_summary(&self) {
        match self.api.summary().await {
            Ok(summary) => self.host.update(|s| s.summary = summary),
            Err(e) => log::error!("loading summary failed: {}", e),
        }
    }

    /// list and summary are fetched side by side; a hung list does not
    /// hold back the counts
    async fn refresh(&self) {
        futures::join!(self.reload_campaigns(), self.load_summary());
    }

    pub fn set_search(&self, text: String) {
        self.host.update(|s| s.search = text);
    }

    /// stores the search text and pushes the reload out by the quiet period
    pub fn search_input<S: Scheduler>(&self, text: String, debouncer: &mut Debouncer<S>)
    where
        A: Clone + 'static,
        H: Clone + 'static,
    {
        self.set_search(text);
        let controller = self.clone();
        debouncer.trigger(move || {
            let host = controller.host.clone();
            host.spawn(async move { controller.reload_campaigns().await });
        });
    }

    // --------------------------------------------------------------------------
    // mutations
    // --------------------------------------------------------------------------

    pub async fn add_campaign(&self) {
        let form = self.host.read(|s| s.add_form.clone());
        let new_campaign = match form.validate() {
            Ok(c) => c,
            Err(e) => {
                self.host.alert(&e.to_string());
                return;
            }
        };

        match self.api.create_campaign(&new_campaign).await {
            Ok(created) => {
                log::info!("added campaign {} ({})", created.name, created.id);
                self.host.update(|s| {
                    s.show_success(&created.name);
                    s.add_form.clear_inputs();
                });
                self.refresh().await;
            }
            Err(e) => {
                log::warn!("adding campaign failed: {}", e);
                self.host.alert(e.server_message().unwrap_or(ADD_FALLBACK_ERROR));
            }
        }
    }

    /// applies the new status locally first, then tells the api
    pub async fn update_status(&self, id: &str, status: CampaignStatus) {
        self.host.update(|s| s.set_row_status(id, status));

        if let Err(e) = self.api.update_status(id, status).await {
            log::warn!("status update of {} to {} failed: {}", id, status, e);
        }
        self.load_summary().await;
    }

    pub fn request_delete(&self, id: &str, name: &str) {
        self.host.update(|s| s.open_delete_prompt(id, name));
    }

    pub async fn confirm_delete(&self) {
        let Some(id) = self.host.read(AppState::confirmable_delete) else {
            return;
        };

        match self.api.delete_campaign(&id).await {
            Ok(()) => log::info!("deleted campaign {}", id),
            Err(e) => log::warn!("deleting campaign {} failed: {}", id, e),
        }
        self.host.update(AppState::close_delete_prompt);
        self.refresh().await;
    }

    pub fn cancel_delete(&self) {
        self.host.update(AppState::close_delete_prompt);
    }

    pub fn dismiss_success(&self) {
        self.host.update(AppState::dismiss_success);
    }
}

// ==============================================================================
// tests
// ==============================================================================
