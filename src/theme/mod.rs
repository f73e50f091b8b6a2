//! Theme preference resolution.
//!
//! The user's stored intent is one of three modes: an explicit light or dark
//! choice, or "system", which follows the host's `prefers-color-scheme`
//! signal. [`ThemeController`] reconciles the stored mode against that signal
//! and keeps the document root's `dark` marker in sync.
//!
//! The browser surfaces (localStorage, matchMedia, the `<html>` class list)
//! are injected behind small capability traits so the resolution logic runs
//! identically on the server, in the browser, and under test with in-memory
//! fakes.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// localStorage key holding the user's theme choice.
const STORAGE_KEY: &str = "ksr-theme";

/// The user's stored theme intent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the host environment's color scheme.
    #[default]
    System,
}

impl ThemeMode {
    /// The successor in the toggle ring: light -> dark -> system -> light.
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized stored value. Callers fall back to [`ThemeMode::System`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized theme mode `{0}`")]
pub struct ParseThemeModeError(String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}

/// Persistence write failure. Non-fatal: the in-memory mode stays
/// authoritative for the session.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage rejected the write")]
    Denied,
}

/// Key-value persistence for the theme choice (localStorage in the browser).
pub trait ThemeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The host environment's color scheme: a current reading plus change
/// notifications. Externally owned and mutable at any time (OS theme switch).
pub trait ColorScheme {
    fn prefers_dark(&self) -> bool;

    /// Registers `callback` for change notifications. The returned guard
    /// removes the listener when dropped.
    fn on_change(&self, callback: Box<dyn FnMut(bool)>) -> Subscription;
}

/// Where the resolved appearance lands: the `dark` marker on the document
/// root. The resolver's only write surface toward the rest of the UI.
pub trait ThemeTarget {
    fn set_dark(&self, dark: bool);
}

/// RAII guard for a [`ColorScheme`] listener. Unsubscribes on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A guard with nothing to undo, for environments without an ambient
    /// signal source.
    pub fn noop() -> Self {
        Self { cancel: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

struct Inner {
    mode: Cell<ThemeMode>,
    store: Box<dyn ThemeStore>,
    scheme: Box<dyn ColorScheme>,
    target: Box<dyn ThemeTarget>,
}

impl Inner {
    fn apply(&self) {
        let mode = self.mode.get();
        let dark = mode == ThemeMode::Dark
            || (mode == ThemeMode::System && self.scheme.prefers_dark());
        self.target.set_dark(dark);
    }
}

/// Owns the theme mode and keeps the applied appearance in sync with it and
/// with the host color scheme. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct ThemeController {
    inner: Rc<Inner>,
}

impl ThemeController {
    /// Loads the stored mode. Absent or unrecognized values resolve to
    /// [`ThemeMode::System`].
    pub fn new(
        store: Box<dyn ThemeStore>,
        scheme: Box<dyn ColorScheme>,
        target: Box<dyn ThemeTarget>,
    ) -> Self {
        let mode = store
            .get(STORAGE_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Self {
            inner: Rc::new(Inner {
                mode: Cell::new(mode),
                store,
                scheme,
                target,
            }),
        }
    }

    /// A controller wired to the browser on wasm, inert during server-side
    /// rendering (the pre-hydration script handles the initial paint there).
    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        return Self::new(
            Box::new(web::LocalStorage),
            Box::new(web::MediaQuery),
            Box::new(web::DocumentRoot),
        );
        #[cfg(not(target_arch = "wasm32"))]
        return Self::new(
            Box::new(inert::InertStore),
            Box::new(inert::InertScheme),
            Box::new(inert::InertTarget),
        );
    }

    /// The current stored intent.
    pub fn mode(&self) -> ThemeMode {
        self.inner.mode.get()
    }

    /// Recomputes the resolved appearance and writes it to the target.
    /// Dark iff the mode is dark, or the mode is system and the host scheme
    /// is dark.
    pub fn apply(&self) {
        self.inner.apply();
    }

    /// Advances the mode ring, persists best-effort, re-applies, and returns
    /// the new mode. A failed write is logged and otherwise ignored; the new
    /// mode still takes effect for this session.
    pub fn cycle(&self) -> ThemeMode {
        let next = self.mode().next();
        self.inner.mode.set(next);
        if let Err(err) = self.inner.store.set(STORAGE_KEY, next.as_str()) {
            tracing::warn!(%err, "failed to persist theme preference");
        }
        self.inner.apply();
        next
    }

    /// Starts following host color-scheme changes. While the mode is
    /// `System`, each change re-applies; explicit light/dark modes ignore
    /// them. Dropping the returned guard stops listening; a notification
    /// that races teardown of the controller itself is a no-op.
    pub fn watch_color_scheme(&self) -> Subscription {
        let weak = Rc::downgrade(&self.inner);
        self.inner.scheme.on_change(Box::new(move |_dark| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.mode.get() == ThemeMode::System {
                inner.apply();
            }
        }))
    }
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.mode())
            .finish_non_exhaustive()
    }
}

/// Inert capabilities for non-browser builds. Server-side rendering never
/// observes a stored preference or an ambient scheme; hydration re-resolves
/// on the client.
#[cfg(not(target_arch = "wasm32"))]
mod inert {
    use super::{ColorScheme, StoreError, Subscription, ThemeStore, ThemeTarget};

    pub struct InertStore;

    impl ThemeStore for InertStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    pub struct InertScheme;

    impl ColorScheme for InertScheme {
        fn prefers_dark(&self) -> bool {
            false
        }

        fn on_change(&self, _callback: Box<dyn FnMut(bool)>) -> Subscription {
            Subscription::noop()
        }
    }

    pub struct InertTarget;

    impl ThemeTarget for InertTarget {
        fn set_dark(&self, _dark: bool) {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Clone, Default)]
    struct MemoryStore {
        values: Rc<RefCell<HashMap<String, String>>>,
        fail_writes: Rc<Cell<bool>>,
    }

    impl MemoryStore {
        fn seeded(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }
    }

    impl ThemeStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.fail_writes.get() {
                return Err(StoreError::Denied);
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    type Listener = Rc<RefCell<Box<dyn FnMut(bool)>>>;

    #[derive(Clone, Default)]
    struct FakeScheme {
        dark: Rc<Cell<bool>>,
        listeners: Rc<RefCell<Vec<(usize, Listener)>>>,
        next_id: Rc<Cell<usize>>,
    }

    impl FakeScheme {
        fn set_dark(&self, dark: bool) {
            self.dark.set(dark);
            let listeners: Vec<Listener> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, l)| l.clone())
                .collect();
            for listener in listeners {
                (listener.borrow_mut())(dark);
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl ColorScheme for FakeScheme {
        fn prefers_dark(&self) -> bool {
            self.dark.get()
        }

        fn on_change(&self, callback: Box<dyn FnMut(bool)>) -> Subscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners
                .borrow_mut()
                .push((id, Rc::new(RefCell::new(callback))));
            let listeners = self.listeners.clone();
            Subscription::new(move || {
                listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            })
        }
    }

    #[derive(Clone, Default)]
    struct FakeTarget {
        history: Rc<RefCell<Vec<bool>>>,
    }

    impl FakeTarget {
        fn is_dark(&self) -> bool {
            self.history.borrow().last().copied().unwrap_or(false)
        }

        fn writes(&self) -> usize {
            self.history.borrow().len()
        }
    }

    impl ThemeTarget for FakeTarget {
        fn set_dark(&self, dark: bool) {
            self.history.borrow_mut().push(dark);
        }
    }

    fn controller(
        store: MemoryStore,
        scheme: FakeScheme,
        target: FakeTarget,
    ) -> ThemeController {
        ThemeController::new(Box::new(store), Box::new(scheme), Box::new(target))
    }

    #[test]
    fn test_resolved_appearance_matrix() {
        for (mode, ambient, expect_dark) in [
            (ThemeMode::Light, false, false),
            (ThemeMode::Light, true, false),
            (ThemeMode::Dark, false, true),
            (ThemeMode::Dark, true, true),
            (ThemeMode::System, false, false),
            (ThemeMode::System, true, true),
        ] {
            let scheme = FakeScheme::default();
            scheme.dark.set(ambient);
            let target = FakeTarget::default();
            let ctl = controller(
                MemoryStore::seeded(STORAGE_KEY, mode.as_str()),
                scheme,
                target.clone(),
            );
            ctl.apply();
            assert_eq!(
                target.is_dark(),
                expect_dark,
                "mode={mode} ambient={ambient}"
            );
        }
    }

    #[test]
    fn test_cycle_sequence_from_light() {
        let ctl = controller(
            MemoryStore::seeded(STORAGE_KEY, "light"),
            FakeScheme::default(),
            FakeTarget::default(),
        );
        assert_eq!(ctl.cycle(), ThemeMode::Dark);
        assert_eq!(ctl.cycle(), ThemeMode::System);
        assert_eq!(ctl.cycle(), ThemeMode::Light);
    }

    #[test]
    fn test_cycle_has_period_three_from_any_mode() {
        for start in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            let ctl = controller(
                MemoryStore::seeded(STORAGE_KEY, start.as_str()),
                FakeScheme::default(),
                FakeTarget::default(),
            );
            ctl.cycle();
            ctl.cycle();
            assert_eq!(ctl.cycle(), start);
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let target = FakeTarget::default();
        let ctl = controller(
            MemoryStore::seeded(STORAGE_KEY, "dark"),
            FakeScheme::default(),
            target.clone(),
        );
        ctl.apply();
        ctl.apply();
        assert_eq!(*target.history.borrow(), vec![true, true]);
    }

    #[test]
    fn test_ambient_change_ignored_under_explicit_mode() {
        for mode in ["light", "dark"] {
            let scheme = FakeScheme::default();
            let target = FakeTarget::default();
            let ctl = controller(
                MemoryStore::seeded(STORAGE_KEY, mode),
                scheme.clone(),
                target.clone(),
            );
            ctl.apply();
            let _watch = ctl.watch_color_scheme();
            let writes_before = target.writes();
            scheme.set_dark(true);
            scheme.set_dark(false);
            assert_eq!(target.writes(), writes_before, "mode={mode}");
        }
    }

    #[test]
    fn test_ambient_change_tracked_under_system_mode() {
        let scheme = FakeScheme::default();
        let target = FakeTarget::default();
        let ctl = controller(MemoryStore::default(), scheme.clone(), target.clone());
        assert_eq!(ctl.mode(), ThemeMode::System);
        ctl.apply();
        let _watch = ctl.watch_color_scheme();
        scheme.set_dark(true);
        assert!(target.is_dark());
        scheme.set_dark(false);
        assert!(!target.is_dark());
    }

    #[test]
    fn test_preference_survives_a_new_session() {
        let store = MemoryStore::seeded(STORAGE_KEY, "light");
        let ctl = controller(store.clone(), FakeScheme::default(), FakeTarget::default());
        assert_eq!(ctl.cycle(), ThemeMode::Dark);
        drop(ctl);

        let fresh = controller(store, FakeScheme::default(), FakeTarget::default());
        assert_eq!(fresh.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_malformed_stored_value_defaults_to_system() {
        let ctl = controller(
            MemoryStore::seeded(STORAGE_KEY, "blue"),
            FakeScheme::default(),
            FakeTarget::default(),
        );
        assert_eq!(ctl.mode(), ThemeMode::System);
    }

    #[test]
    fn test_missing_stored_value_defaults_to_system() {
        let ctl = controller(
            MemoryStore::default(),
            FakeScheme::default(),
            FakeTarget::default(),
        );
        assert_eq!(ctl.mode(), ThemeMode::System);
    }

    #[test]
    fn test_failed_write_keeps_in_memory_mode() {
        let store = MemoryStore::seeded(STORAGE_KEY, "light");
        store.fail_writes.set(true);
        let target = FakeTarget::default();
        let ctl = controller(store.clone(), FakeScheme::default(), target.clone());

        assert_eq!(ctl.cycle(), ThemeMode::Dark);
        assert_eq!(ctl.mode(), ThemeMode::Dark);
        assert!(target.is_dark());
        // The stored value is untouched.
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_dropping_subscription_removes_listener() {
        let scheme = FakeScheme::default();
        let ctl = controller(
            MemoryStore::default(),
            scheme.clone(),
            FakeTarget::default(),
        );
        let watch = ctl.watch_color_scheme();
        assert_eq!(scheme.listener_count(), 1);
        drop(watch);
        assert_eq!(scheme.listener_count(), 0);
    }

    #[test]
    fn test_notification_after_controller_teardown_is_noop() {
        let scheme = FakeScheme::default();
        let target = FakeTarget::default();
        let ctl = controller(MemoryStore::default(), scheme.clone(), target.clone());
        let _watch = ctl.watch_color_scheme();
        drop(ctl);
        // The listener is still registered until the guard drops; firing it
        // now must do nothing.
        scheme.set_dark(true);
        assert_eq!(target.writes(), 0);
    }

    #[test]
    fn test_mode_parse_and_display_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(mode.as_str().parse::<ThemeMode>().unwrap(), mode);
        }
        assert!("Dark".parse::<ThemeMode>().is_err());
        assert!("".parse::<ThemeMode>().is_err());
    }
}
