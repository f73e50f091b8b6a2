//! Stock detail page component.

use dioxus::prelude::*;

use crate::app::components::Layout;

/// Detail view for a single ticker taken from the route.
#[component]
pub fn Detail(ticker: String) -> Element {
    rsx! {
        Layout {
            title: format!("{ticker} Detail"),
            nav_active: "dashboard".to_string(),
            h1 { "Stock Detail: {ticker}" }
            p { class: "placeholder", "Price history and news for this stock are under construction." }
        }
    }
}
