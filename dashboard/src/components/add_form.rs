//! Add campaign form

use leptos::prelude::*;
use shared::CampaignStatus;

use crate::AppController;

#[component]
pub fn AddCampaignForm(controller: AppController) -> impl IntoView {
    let state = controller.host().state();

    // re-evaluated on every keystroke in the three required fields
    let complete = move || state.with(|s| s.add_form.is_complete());

    let add = move |_| {
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            controller.add_campaign().await;
        });
    };

    view! {
        <div class="card">
            <h2>"➕ Add Campaign"</h2>

            <div class="input-group">
                <input
                    type="text"
                    placeholder="Campaign name"
                    prop:value=move || state.with(|s| s.add_form.name.clone())
                    on:input=move |ev| state.update(|s| s.add_form.name = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Client"
                    prop:value=move || state.with(|s| s.add_form.client.clone())
                    on:input=move |ev| state.update(|s| s.add_form.client = event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || state.with(|s| s.add_form.start_date.clone())
                    on:input=move |ev| state.update(|s| s.add_form.start_date = event_target_value(&ev))
                />
                <select
                    prop:value=move || state.with(|s| s.add_form.status.label())
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<CampaignStatus>() {
                            Ok(status) => state.update(|s| s.add_form.status = status),
                            Err(e) => log::warn!("{}", e),
                        }
                    }
                >
                    {CampaignStatus::ALL
                        .into_iter()
                        .map(|status| view! { <option value=status.label()>{status.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button
                    on:click=add
                    disabled=move || !complete()
                    style=move || if complete() {
                        "opacity: 1; cursor: pointer;"
                    } else {
                        "opacity: 0.6; cursor: not-allowed;"
                    }
                >
                    "Add Campaign"
                </button>
            </div>
        </div>
    }
}
