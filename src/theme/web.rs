//! Browser-backed theme capabilities (wasm32 only).
//!
//! Missing browser surfaces (no window, storage disabled, matchMedia
//! unsupported) degrade to no-ops rather than errors.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::{ColorScheme, StoreError, Subscription, ThemeStore, ThemeTarget};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage` behind the [`ThemeStore`] trait.
pub struct LocalStorage;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl ThemeStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = storage().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|_| StoreError::Denied)
    }
}

/// `window.matchMedia("(prefers-color-scheme: dark)")` behind the
/// [`ColorScheme`] trait.
pub struct MediaQuery;

fn media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

impl ColorScheme for MediaQuery {
    fn prefers_dark(&self) -> bool {
        media_query().map(|list| list.matches()).unwrap_or(false)
    }

    fn on_change(&self, mut callback: Box<dyn FnMut(bool)>) -> Subscription {
        let Some(list) = media_query() else {
            return Subscription::noop();
        };
        let closure = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| {
                callback(event.matches());
            },
        );
        if list
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .is_err()
        {
            return Subscription::noop();
        }
        // The guard keeps the closure alive until unsubscribe.
        Subscription::new(move || {
            let _ = list
                .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        })
    }
}

/// The `dark` class on `document.documentElement`, which the stylesheet keys
/// off of.
pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn set_dark(&self, dark: bool) {
        if let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            let _ = root.class_list().toggle_with_force("dark", dark);
        }
    }
}
