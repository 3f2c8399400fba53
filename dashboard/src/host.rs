//! ==============================================================================
//! host.rs - ViewHost backed by a leptos signal
//! ==============================================================================
//!
//! the controller writes AppState through here. every write notifies the
//! views reading the signal, so a state change is a re-render.
//!
//! ==============================================================================

use std::future::Future;

use leptos::prelude::*;
use shared::{AppState, ViewHost};

use crate::storage;

#[derive(Debug, Clone, Copy)]
pub struct BrowserHost {
    state: RwSignal<AppState>,
}

impl BrowserHost {
    pub fn new(state: RwSignal<AppState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> RwSignal<AppState> {
        self.state
    }
}

impl ViewHost for BrowserHost {
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut guard = self.state.write();
        f(&mut *guard)
    }

    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.state.with_untracked(f)
    }

    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::error!("could not show alert: {}", message);
        }
    }

    fn set_session_flag(&self, logged_in: bool) {
        if let Err(e) = storage::set_session_flag(logged_in) {
            log::warn!("session flag not stored: {}", e);
        }
    }

    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        leptos::task::spawn_local(task);
    }
}
