//! K-SectorRadar - Web Shell
//!
//! Client-side web application shell for a stock-sector dashboard.
//!
//! This library provides:
//! - Page routing (dashboard, stock detail, comparison, settings)
//! - Header navigation with a light/dark/system theme toggle
//! - Theme preference resolution with persistence and OS scheme tracking
//! - Web UI (Dioxus + client-side hydration)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Theme preference resolver (shared; browser-backed on wasm)
pub mod theme;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod config;
