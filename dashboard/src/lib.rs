//! ==============================================================================
//! lib.rs - Campaign Tracker Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front end for the campaign tracker api. shows a login
//!     screen, then the campaign table with search, the add form, status
//!     counts and the delete/success overlays.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - all behaviour lives in shared::Controller; components only read
//!       AppState and forward events
//!     - calls the api via fetch (gloo-net)
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use shared::{ApiConfig, AppState, Controller};
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod host;
mod storage;
mod timer;

use api::HttpApi;
use components::{AddCampaignForm, CampaignTable, DeleteModal, Header, LoginScreen, SuccessModal, SummaryBar};
use host::BrowserHost;

/// controller as wired in the browser
pub(crate) type AppController = Controller<HttpApi, BrowserHost>;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    log::info!("campaign tracker using api at {}", config.base_url());

    let state = RwSignal::new(AppState::new());
    let controller: AppController = Controller::new(HttpApi::new(config), BrowserHost::new(state));
    controller.page_loaded();

    let logged_in = move || state.with(|s| s.is_logged_in());
    let login_controller = controller.clone();
    let main_controller = controller.clone();

    view! {
        <Title text="Campaign Tracker" />
        <Header controller=controller.clone() />
        <div class="container">
            <Show
                when=logged_in
                fallback=move || view! { <LoginScreen controller=login_controller.clone() /> }
            >
                <SummaryBar state=state />
                <AddCampaignForm controller=main_controller.clone() />
                <CampaignTable controller=main_controller.clone() />
            </Show>
        </div>
        <DeleteModal controller=controller.clone() />
        <SuccessModal controller=controller />
    }
}
