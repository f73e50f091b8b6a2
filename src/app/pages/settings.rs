//! Settings page component.

use dioxus::prelude::*;

use crate::app::components::Layout;

/// Application settings view. The theme preference itself lives in the
/// header toggle; this page will hold watchlist and display options.
#[component]
pub fn Settings() -> Element {
    rsx! {
        Layout {
            title: "Settings".to_string(),
            nav_active: "settings".to_string(),
            h1 { "Settings" }
            p { class: "placeholder", "Watchlist and display options are under construction." }
        }
    }
}
