//! Header component

use leptos::prelude::*;

use crate::AppController;

#[component]
pub fn Header(controller: AppController) -> impl IntoView {
    let state = controller.host().state();
    let logged_in = move || state.with(|s| s.is_logged_in());

    view! {
        <header class="header">
            <div>
                <h1>"Campaign Tracker"</h1>
                <p class="subtitle">"Marketing campaigns at a glance"</p>
            </div>
            <Show when=logged_in>
                <button class="logout-btn" on:click={
                    let controller = controller.clone();
                    move |_| controller.logout()
                }>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
