//! Campaign table with debounced search

use leptos::prelude::*;
use shared::config::SEARCH_DEBOUNCE_MS;
use shared::{CampaignRow, CampaignStatus, Debouncer};

use crate::timer::TimeoutScheduler;
use crate::AppController;

#[component]
pub fn CampaignTable(controller: AppController) -> impl IntoView {
    let state = controller.host().state();
    let debouncer = StoredValue::new_local(Debouncer::new(TimeoutScheduler, SEARCH_DEBOUNCE_MS));

    // every keystroke pushes the reload out by the quiet period
    let on_search = {
        let controller = controller.clone();
        move |ev: leptos::ev::Event| {
            let text = event_target_value(&ev);
            debouncer.update_value(|d| controller.search_input(text, d));
        }
    };

    view! {
        <div class="card">
            <h2>"📋 Campaigns"</h2>

            <input
                type="text"
                class="search"
                placeholder="Search by name or client"
                prop:value=move || state.with(|s| s.search.clone())
                on:input=on_search
            />

            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Client"</th>
                        <th>"Start Date"</th>
                        <th>"Status"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || state.with(|s| s.rows()).into_iter().map(|row| {
                        campaign_row(controller.clone(), row)
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}

fn campaign_row(controller: AppController, row: CampaignRow) -> impl IntoView {
    let CampaignRow { id, name, client, start_date, status_class, options, .. } = row;

    let on_status = {
        let controller = controller.clone();
        let id = id.clone();
        move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<CampaignStatus>() {
            Ok(status) => {
                let controller = controller.clone();
                let id = id.clone();
                leptos::task::spawn_local(async move {
                    controller.update_status(&id, status).await;
                });
            }
            Err(e) => log::warn!("{}", e),
        }
    };

    let on_delete = {
        let name = name.clone();
        move |_| controller.request_delete(&id, &name)
    };

    view! {
        <tr>
            <td>{name}</td>
            <td>{client}</td>
            <td>{start_date}</td>
            <td>
                <select class=status_class.unwrap_or("") on:change=on_status>
                    {options
                        .into_iter()
                        .map(|opt| view! {
                            <option value=opt.status.label() selected=opt.selected>
                                {opt.status.label()}
                            </option>
                        })
                        .collect::<Vec<_>>()}
                </select>
            </td>
            <td>
                <button class="delete-btn" on:click=on_delete>"Delete"</button>
            </td>
        </tr>
    }
}
