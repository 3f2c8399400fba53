//! ==============================================================================
//! state.rs - application state of the campaign client
//! ==============================================================================
//!
//! purpose:
//!     one explicitly constructed object holding everything the views show:
//!     which screen is visible, form inputs, the last fetched campaigns and
//!     summary, and the open overlays.
//!
//! view state machine:
//!     LoggedOut --login ok--> LoggedIn --logout--> LoggedOut
//!     the initial state is always LoggedOut. errors never change it.
//!
//! stale responses:
//!     every campaign list fetch takes a LoadTicket. only the response for
//!     the most recently issued ticket is applied.
//!
//! ==============================================================================

use crate::form::AddForm;
use crate::models::{Campaign, CampaignStatus, Summary};

// ==============================================================================
// view state
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// inputs and inline error of the login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: String,
}

/// generation of a campaign list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

// ==============================================================================
// rendered rows
// ==============================================================================

/// one option of a row's status selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOption {
    pub status: CampaignStatus,
    pub selected: bool,
}

/// declarative description of one table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignRow {
    pub id: String,
    pub name: String,
    pub client: String,
    pub start_date: String,
    /// none when the api label names no known status
    pub status: Option<CampaignStatus>,
    pub status_class: Option<&'static str>,
    pub options: [StatusOption; 3],
}

impl CampaignRow {
    pub fn from_campaign(campaign: &Campaign) -> Self {
        let current = campaign.status.status();
        Self {
            id: campaign.id.clone(),
            name: campaign.name.clone(),
            client: campaign.client.clone(),
            start_date: campaign.start_date.clone(),
            status: current,
            status_class: current.map(CampaignStatus::css_class),
            options: CampaignStatus::ALL.map(|status| StatusOption {
                status,
                selected: current == Some(status),
            }),
        }
    }
}

// ==============================================================================
// app state
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub view: ViewState,
    pub login: LoginForm,
    pub search: String,
    pub add_form: AddForm,
    pub campaigns: Vec<Campaign>,
    pub summary: Summary,
    /// id kept between a delete request and the user's answer
    pub pending_delete: Option<String>,
    /// confirmation text while the delete prompt is open
    pub delete_prompt: Option<String>,
    /// confirmation text while the success notice is open
    pub success_notice: Option<String>,
    load_generation: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.view == ViewState::LoggedIn
    }

    /// sessions never survive a reload
    pub fn reset_for_page_load(&mut self) {
        self.view = ViewState::LoggedOut;
    }

    pub fn enter_main_view(&mut self) {
        self.view = ViewState::LoggedIn;
        self.clear_credentials();
    }

    pub fn enter_login_view(&mut self) {
        self.view = ViewState::LoggedOut;
        self.clear_credentials();
    }

    fn clear_credentials(&mut self) {
        self.login.username.clear();
        self.login.password.clear();
    }

    // --------------------------------------------------------------------------
    // campaign list
    // --------------------------------------------------------------------------

    pub fn begin_campaign_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        LoadTicket(self.load_generation)
    }

    /// replaces the table; returns false and keeps the table if a newer
    /// load was issued after `ticket`
    pub fn finish_campaign_load(&mut self, ticket: LoadTicket, campaigns: Vec<Campaign>) -> bool {
        if ticket.0 != self.load_generation {
            return false;
        }
        self.campaigns = campaigns;
        true
    }

    /// rows rebuilt from scratch for every render
    pub fn rows(&self) -> Vec<CampaignRow> {
        self.campaigns.iter().map(CampaignRow::from_campaign).collect()
    }

    /// optimistic status change of a single row
    pub fn set_row_status(&mut self, id: &str, status: CampaignStatus) -> bool {
        match self.campaigns.iter_mut().find(|c| c.id == id) {
            Some(campaign) => {
                campaign.status = status.into();
                true
            }
            None => false,
        }
    }

    // --------------------------------------------------------------------------
    // overlays
    // --------------------------------------------------------------------------

    pub fn open_delete_prompt(&mut self, id: &str, name: &str) {
        self.pending_delete = Some(id.to_string());
        self.delete_prompt = Some(format!("Are you sure you want to delete \"{}\"?", name));
    }

    /// closes the prompt; the pending id is left in place
    pub fn close_delete_prompt(&mut self) {
        self.delete_prompt = None;
    }

    /// id to delete if the prompt is open
    pub fn confirmable_delete(&self) -> Option<String> {
        self.delete_prompt.as_ref()?;
        self.pending_delete.clone()
    }

    pub fn show_success(&mut self, campaign_name: &str) {
        self.success_notice = Some(format!("Campaign \"{}\" added successfully!", campaign_name));
    }

    pub fn dismiss_success(&mut self) {
        self.success_notice = None;
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusLabel;

    fn campaign(id: &str, status: CampaignStatus) -> Campaign {
        Campaign {
            id: id.into(),
            name: format!("Campaign {}", id),
            client: "Acme".into(),
            start_date: "2024-01-01".into(),
            status: status.into(),
        }
    }

    #[test]
    fn test_initial_state_is_logged_out() {
        assert_eq!(AppState::new().view, ViewState::LoggedOut);
    }

    #[test]
    fn test_view_transitions_clear_credentials() {
        let mut state = AppState::new();
        state.login.username = "admin".into();
        state.login.password = "1234".into();
        state.enter_main_view();
        assert!(state.is_logged_in());
        assert!(state.login.username.is_empty());

        state.login.username = "someone".into();
        state.enter_login_view();
        assert_eq!(state.view, ViewState::LoggedOut);
        assert!(state.login.username.is_empty());
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let mut state = AppState::new();
        let first = state.begin_campaign_load();
        let second = state.begin_campaign_load();

        assert!(state.finish_campaign_load(second, vec![campaign("new", CampaignStatus::Active)]));
        assert!(!state.finish_campaign_load(first, vec![campaign("old", CampaignStatus::Paused)]));
        assert_eq!(state.campaigns.len(), 1);
        assert_eq!(state.campaigns[0].id, "new");
    }

    #[test]
    fn test_row_has_exactly_one_selected_option() {
        for status in CampaignStatus::ALL {
            let row = CampaignRow::from_campaign(&campaign("1", status));
            let selected: Vec<_> = row.options.iter().filter(|o| o.selected).collect();
            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].status, status);
            assert_eq!(row.status_class, Some(status.css_class()));
        }
    }

    #[test]
    fn test_unknown_label_has_no_class_or_selection() {
        let mut odd = campaign("2", CampaignStatus::Active);
        odd.status = StatusLabel::new("active");
        let row = CampaignRow::from_campaign(&odd);
        assert_eq!(row.status, None);
        assert_eq!(row.status_class, None);
        assert!(row.options.iter().all(|o| !o.selected));
    }

    #[test]
    fn test_optimistic_status_change_updates_class() {
        let mut state = AppState::new();
        state.campaigns = vec![campaign("1", CampaignStatus::Active)];
        assert!(state.set_row_status("1", CampaignStatus::Completed));
        assert_eq!(state.rows()[0].status_class, Some("completed"));
        assert!(!state.set_row_status("missing", CampaignStatus::Paused));
    }

    #[test]
    fn test_cancel_keeps_pending_id() {
        let mut state = AppState::new();
        state.open_delete_prompt("42", "Launch");
        assert_eq!(state.delete_prompt.as_deref(), Some("Are you sure you want to delete \"Launch\"?"));

        state.close_delete_prompt();
        assert_eq!(state.pending_delete.as_deref(), Some("42"));
        assert_eq!(state.confirmable_delete(), None);
    }

    #[test]
    fn test_success_notice_text() {
        let mut state = AppState::new();
        state.show_success("Launch");
        assert_eq!(state.success_notice.as_deref(), Some("Campaign \"Launch\" added successfully!"));
        state.dismiss_success();
        assert_eq!(state.success_notice, None);
    }
}
