//! Login screen component

use leptos::prelude::*;
use shared::Credentials;

use crate::AppController;

#[component]
pub fn LoginScreen(controller: AppController) -> impl IntoView {
    let state = controller.host().state();

    // login action
    let login = move |_| {
        let credentials = state.with_untracked(|s| Credentials::from_input(&s.login.username, &s.login.password));
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            controller.login(credentials).await;
        });
    };

    view! {
        <div class="card login-card">
            <h2>"🔐 Login"</h2>

            <div class="input-group">
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || state.with(|s| s.login.username.clone())
                    on:input=move |ev| state.update(|s| s.login.username = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || state.with(|s| s.login.password.clone())
                    on:input=move |ev| state.update(|s| s.login.password = event_target_value(&ev))
                />
                <button on:click=login>"Login"</button>
            </div>

            // inline error from the server
            <p class="error-text">{move || state.with(|s| s.login.error.clone())}</p>
        </div>
    }
}
