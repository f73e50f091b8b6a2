//! Layout component wrapping all pages with shared chrome.

use dioxus::prelude::*;

use super::nav::Nav;
use super::theme::THEME_SCRIPT;

/// CSS styles for the application. Dark values key off the `dark` class the
/// theme resolver maintains on the document root.
const CUSTOM_STYLES: &str = r#"
:root {
    --bg: #ffffff;
    --fg: #111827;
    --muted: #6b7280;
    --border: #e5e7eb;
    --accent: #2563eb;
    --hover-bg: #f3f4f6;
}
:root.dark {
    --bg: #111827;
    --fg: #f9fafb;
    --muted: #9ca3af;
    --border: #374151;
    --accent: #3b82f6;
    --hover-bg: #1f2937;
}
* { box-sizing: border-box; }
body {
    margin: 0;
    background: var(--bg);
    color: var(--fg);
    font-family: system-ui, sans-serif;
    transition: background-color 0.2s, color 0.2s;
}
.navbar {
    position: sticky;
    top: 0;
    z-index: 50;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
}
.navbar-inner {
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 1rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 4rem;
}
.brand { font-size: 1.25rem; font-weight: 700; color: var(--fg); text-decoration: none; }
.nav-links { display: flex; align-items: center; gap: 1.5rem; }
.nav-link { color: var(--muted); text-decoration: none; }
.nav-link:hover, .nav-link.active { color: var(--accent); }
.theme-toggle {
    padding: 0.5rem;
    border: none;
    border-radius: 0.5rem;
    background: transparent;
    cursor: pointer;
    font-size: 1rem;
}
.theme-toggle:hover { background: var(--hover-bg); }
.menu-button { display: none; border: none; background: transparent; color: var(--muted); cursor: pointer; padding: 0.5rem; }
.menu-button .icon { height: 1.5rem; width: 1.5rem; }
.mobile-menu { display: none; }
.sr-only {
    position: absolute;
    width: 1px; height: 1px;
    padding: 0; margin: -1px;
    overflow: hidden; clip: rect(0, 0, 0, 0);
    white-space: nowrap; border: 0;
}
@media (max-width: 768px) {
    .nav-links { display: none; }
    .menu-button { display: inline-flex; }
    .mobile-menu.open { display: flex; flex-direction: column; gap: 0.25rem; padding: 0.5rem 1rem 0.75rem; }
}
main.content { max-width: 72rem; margin: 0 auto; padding: 2rem 1rem; }
.content h1 { font-size: 1.875rem; font-weight: 700; margin: 0 0 1rem; }
.placeholder { color: var(--muted); }
footer.site-footer {
    max-width: 72rem;
    margin: 0 auto;
    padding: 1rem;
    color: var(--muted);
    font-size: 0.85rem;
}
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - K-SectorRadar", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Style { {CUSTOM_STYLES} }
        // Theme init runs immediately (no DOM needed) to prevent flash
        document::Script { {THEME_SCRIPT} }

        // Body content
        Nav { active: props.nav_active.clone() }
        main { class: "content",
            {props.children}
        }
        footer { class: "site-footer",
            small { "K-SectorRadar v{version}" }
        }
    }
}
