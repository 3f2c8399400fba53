//! ==============================================================================
//! lib.rs - shared core of the campaign tracker client
//! ==============================================================================
//!
//! purpose:
//!     everything about the campaign client that does not need a browser:
//!     api wire types, application state, form gating, debouncing and the
//!     view controller. kept free of web-sys so it runs under `cargo test`
//!     on the host.
//!
//! relationships:
//!     - used by: dashboard (leptos front end, fetch api client, timers)
//!     - talks to: the campaign api only through the CampaignApi trait
//!
//! layout:
//!     models      - json bodies of the campaign api
//!     config      - api base url, debounce period, storage key
//!     error       - ApiError, ValidationError, StorageError
//!     form        - add form gating and validation
//!     state       - AppState and the logged-in/out view machine
//!     debounce    - Debouncer over a Scheduler
//!     api         - CampaignApi trait
//!     controller  - Controller and the ViewHost seam
//!
//! ==============================================================================

pub mod api;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod form;
pub mod models;
pub mod state;

pub use api::CampaignApi;
pub use config::ApiConfig;
pub use controller::{Controller, ViewHost};
pub use debounce::{Debouncer, Scheduler};
pub use error::{ApiError, StorageError, ValidationError};
pub use form::{AddForm, FormField};
pub use models::{Campaign, CampaignStatus, Credentials, ErrorBody, LoginResponse, NewCampaign, StatusLabel, StatusUpdate, Summary};
pub use state::{AppState, CampaignRow, StatusOption, ViewState};
