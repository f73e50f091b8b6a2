//! Theme toggle component cycling light/dark/system modes.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::theme::{Subscription, ThemeController, ThemeMode};

/// Header button that cycles the theme preference on each click.
///
/// Wires the resolver to the browser on mount: applies the stored preference
/// and starts following the OS color scheme, dropping that subscription when
/// the component unmounts.
#[component]
pub fn ThemeToggle() -> Element {
    let controller = use_hook(ThemeController::platform);
    let mut mode = use_signal(ThemeMode::default);
    let watch = use_hook(|| Rc::new(RefCell::new(None::<Subscription>)));

    {
        let controller = controller.clone();
        let watch = watch.clone();
        use_effect(move || {
            controller.apply();
            mode.set(controller.mode());
            if watch.borrow().is_none() {
                *watch.borrow_mut() = Some(controller.watch_color_scheme());
            }
        });
    }

    {
        let watch = watch.clone();
        use_drop(move || {
            watch.borrow_mut().take();
        });
    }

    let icon = match mode() {
        ThemeMode::Light => "☀️",
        ThemeMode::Dark => "🌙",
        ThemeMode::System => "💻",
    };

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "Toggle theme",
            title: "Theme: {mode}",
            onclick: move |_| {
                mode.set(controller.cycle());
            },
            "{icon}"
        }
    }
}

/// Client-side JavaScript for initial theme setup (included in head).
/// Runs immediately to prevent flash of wrong theme.
pub const THEME_SCRIPT: &str = r#"
(function(){
    var t = localStorage.getItem('ksr-theme');
    if (t !== 'light' && t !== 'dark') t = 'system';
    var dark = t === 'dark' || (t === 'system' && window.matchMedia('(prefers-color-scheme: dark)').matches);
    document.documentElement.classList.toggle('dark', dark);
})();
"#;
