//! Delete confirmation and success overlays

use leptos::prelude::*;

use crate::AppController;

#[component]
pub fn DeleteModal(controller: AppController) -> impl IntoView {
    let state = controller.host().state();
    let message = move || state.with(|s| s.delete_prompt.clone());

    let confirm = {
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            leptos::task::spawn_local(async move {
                controller.confirm_delete().await;
            });
        }
    };
    let cancel = move |_| controller.cancel_delete();

    view! {
        <div class=move || if message().is_some() { "modal" } else { "modal hidden" }>
            <div class="modal-content">
                <p>{move || message().unwrap_or_default()}</p>
                <div class="modal-actions">
                    <button class="danger" on:click=confirm>"Yes, delete"</button>
                    <button on:click=cancel>"Cancel"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessModal(controller: AppController) -> impl IntoView {
    let state = controller.host().state();
    let message = move || state.with(|s| s.success_notice.clone());
    let dismiss = move |_| controller.dismiss_success();

    view! {
        <div class=move || if message().is_some() { "modal" } else { "modal hidden" }>
            <div class="modal-content">
                <p>{move || message().unwrap_or_default()}</p>
                <div class="modal-actions">
                    <button on:click=dismiss>"OK"</button>
                </div>
            </div>
        </div>
    }
}
