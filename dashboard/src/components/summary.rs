//! Status counts

use leptos::prelude::*;
use shared::AppState;

#[component]
pub fn SummaryBar(state: RwSignal<AppState>) -> impl IntoView {
    let summary = move || state.with(|s| s.summary);

    view! {
        <div class="card">
            <div class="stats-row">
                <div class="stat">
                    <div class="stat-value">{move || summary().total}</div>
                    <div class="stat-label">"Total"</div>
                </div>
                <div class="stat active">
                    <div class="stat-value">{move || summary().active}</div>
                    <div class="stat-label">"Active"</div>
                </div>
                <div class="stat paused">
                    <div class="stat-value">{move || summary().paused}</div>
                    <div class="stat-label">"Paused"</div>
                </div>
                <div class="stat completed">
                    <div class="stat-value">{move || summary().completed}</div>
                    <div class="stat-label">"Completed"</div>
                </div>
            </div>
        </div>
    }
}
