//! localStorage-backed progress persistence.
//!
//! Cross-tab consistency is best-effort last-write-wins: another tab's
//! writes land here via `storage` events, and [`subscribe_storage_events`]
//! lets the app reload the tracker when one of the progress keys
//! changes.

use fakeseek_progress::{ACTIVITY_KEY, MODULES_KEY, SCORE_KEY};
use fakeseek_progress::storage::{ProgressStorage, StorageError};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

/// [`ProgressStorage`] over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn backend() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Backend("no global window".into()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Backend("localStorage unavailable".into()))
    }
}

impl ProgressStorage for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::backend()?.get_item(key).map_err(js_error)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::backend()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Backend(format!("{value:?}"))
}

/// Invoke `on_change` whenever another tab writes one of the progress
/// keys. The listener stays registered for the lifetime of the page.
pub fn subscribe_storage_events(mut on_change: impl FnMut() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let closure = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
        move |event: web_sys::StorageEvent| {
            let changed = event.key();
            let relevant = changed.as_deref().is_none_or(|key| {
                key == SCORE_KEY || key == MODULES_KEY || key == ACTIVITY_KEY
            });
            if relevant {
                on_change();
            }
        },
    );

    let _ = window
        .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
    // The app listens until the page goes away.
    closure.forget();
}
