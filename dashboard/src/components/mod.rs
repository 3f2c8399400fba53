//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod add_form;
mod campaign_table;
mod header;
mod login;
mod modals;
mod summary;

pub use add_form::AddCampaignForm;
pub use campaign_table::CampaignTable;
pub use header::Header;
pub use login::LoginScreen;
pub use modals::{DeleteModal, SuccessModal};
pub use summary::SummaryBar;
