//! Settings store: the single owner of game parameters, UI preferences and
//! progression flags.
//!
//! Every write goes through [`SettingsStore::set`], which runs the pure
//! [`reduce`] against the state held *at the time of the call*. Handles are
//! cheap clones of one shared store, handed to whoever needs them.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::progression::Progression;

pub const DEFAULT_SPEED: u32 = 100;
pub const DEFAULT_SIZE: u32 = 15;
pub const DEFAULT_BG_COLOR: &str = "#ffffff";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Light => "Light",
            DisplayMode::Dark => "Dark",
        }
    }
}

/// Snapshot of every tunable value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Milliseconds between relocations of the game target.
    pub speed: u32,
    /// Side length of the game target in pixels.
    pub size: u32,
    pub auto_click: bool,
    pub bg_color: String,
    pub display_mode: DisplayMode,
    pub progress: Progression,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            size: DEFAULT_SIZE,
            auto_click: false,
            bg_color: DEFAULT_BG_COLOR.to_string(),
            display_mode: DisplayMode::Light,
            progress: Progression::default(),
        }
    }
}

/// Which field a [`Setting`] targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingKey {
    Speed,
    Size,
    AutoClick,
    BgColor,
    DisplayMode,
    Progress,
}

impl SettingKey {
    pub fn name(self) -> &'static str {
        match self {
            SettingKey::Speed => "speed",
            SettingKey::Size => "size",
            SettingKey::AutoClick => "autoClick",
            SettingKey::BgColor => "bgColor",
            SettingKey::DisplayMode => "displayMode",
            SettingKey::Progress => "progress",
        }
    }
}

/// One field paired with its new value.
#[derive(Clone, Debug, PartialEq)]
pub enum Setting {
    Speed(u32),
    Size(u32),
    AutoClick(bool),
    BgColor(String),
    DisplayMode(DisplayMode),
    Progress(Progression),
}

impl Setting {
    pub fn key(&self) -> SettingKey {
        match self {
            Setting::Speed(_) => SettingKey::Speed,
            Setting::Size(_) => SettingKey::Size,
            Setting::AutoClick(_) => SettingKey::AutoClick,
            Setting::BgColor(_) => SettingKey::BgColor,
            Setting::DisplayMode(_) => SettingKey::DisplayMode,
            Setting::Progress(_) => SettingKey::Progress,
        }
    }
}

/// Replace exactly one field of `prev`, leaving the rest untouched.
pub fn reduce(prev: &Settings, change: &Setting) -> Settings {
    let mut next = prev.clone();
    match change {
        Setting::Speed(v) => next.speed = *v,
        Setting::Size(v) => next.size = *v,
        Setting::AutoClick(v) => next.auto_click = *v,
        Setting::BgColor(v) => next.bg_color = v.clone(),
        Setting::DisplayMode(v) => next.display_mode = *v,
        Setting::Progress(v) => next.progress = *v,
    }
    next
}

pub type ListenerId = usize;

type Listener = Rc<dyn Fn(&Settings, &Setting)>;

struct StoreInner {
    settings: Settings,
    listeners: Vec<(ListenerId, Listener)>,
    next_id: ListenerId,
}

/// Shared handle to the settings. Clones point at the same state.
#[derive(Clone)]
pub struct SettingsStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl SettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                settings,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Current snapshot.
    pub fn get(&self) -> Settings {
        self.inner.borrow().settings.clone()
    }

    /// Borrow the current state for a read without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&Settings) -> R) -> R {
        f(&self.inner.borrow().settings)
    }

    /// Apply one change and notify listeners.
    ///
    /// Listeners run after the store's borrow is released, so they may read the
    /// store or call `set` again.
    pub fn set(&self, change: Setting) {
        let (snapshot, listeners) = {
            let mut inner = self.inner.borrow_mut();
            let next = reduce(&inner.settings, &change);
            inner.settings = next;
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (inner.settings.clone(), listeners)
        };
        for listener in listeners {
            listener(&snapshot, &change);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&Settings, &Setting) + 'static) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

/// Log every change along with the full snapshot as JSON.
pub fn attach_logger(store: &SettingsStore) -> ListenerId {
    store.subscribe(|settings, change| {
        match serde_json::to_string(settings) {
            Ok(json) => log::debug!("settings.{} changed: {}", change.key().name(), json),
            Err(e) => log::warn!("settings.{} changed (snapshot unavailable: {})", change.key().name(), e),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::progression_for;
    use std::cell::Cell;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.speed, 100);
        assert_eq!(s.size, 15);
        assert!(!s.auto_click);
        assert_eq!(s.bg_color, "#ffffff");
        assert_eq!(s.display_mode, DisplayMode::Light);
        assert_eq!(s.progress, Progression::default());
    }

    #[test]
    fn reduce_touches_only_one_field() {
        let prev = Settings::default();
        let next = reduce(&prev, &Setting::Size(40));
        assert_eq!(next.size, 40);
        assert_eq!(Settings { size: prev.size, ..next.clone() }, prev);
    }

    #[test]
    fn back_to_back_sets_are_all_applied() {
        let store = SettingsStore::default();
        store.set(Setting::Speed(250));
        store.set(Setting::Size(60));
        store.set(Setting::AutoClick(true));
        let s = store.get();
        assert_eq!(s.speed, 250);
        assert_eq!(s.size, 60);
        assert!(s.auto_click);
    }

    #[test]
    fn clones_share_state() {
        let a = SettingsStore::default();
        let b = a.clone();
        b.set(Setting::DisplayMode(DisplayMode::Dark));
        assert_eq!(a.get().display_mode, DisplayMode::Dark);
    }

    #[test]
    fn listeners_see_the_new_snapshot() {
        let store = SettingsStore::default();
        let seen = Rc::new(Cell::new(0u32));
        let seen2 = Rc::clone(&seen);
        store.subscribe(move |s, change| {
            assert_eq!(change.key(), SettingKey::Speed);
            seen2.set(s.speed);
        });
        store.set(Setting::Speed(321));
        assert_eq!(seen.get(), 321);
    }

    #[test]
    fn listener_may_set_again() {
        let store = SettingsStore::default();
        let handle = store.clone();
        store.subscribe(move |s, change| {
            if change.key() == SettingKey::AutoClick && s.size != 99 {
                handle.set(Setting::Size(99));
            }
        });
        store.set(Setting::AutoClick(true));
        let s = store.get();
        assert!(s.auto_click);
        assert_eq!(s.size, 99);
    }

    #[test]
    fn unsubscribed_listener_is_silent() {
        let store = SettingsStore::default();
        let calls = Rc::new(Cell::new(0));
        let calls2 = Rc::clone(&calls);
        let id = store.subscribe(move |_, _| calls2.set(calls2.get() + 1));
        store.set(Setting::Size(20));
        store.unsubscribe(id);
        store.set(Setting::Size(30));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn progress_is_written_whole() {
        let store = SettingsStore::default();
        store.set(Setting::Progress(progression_for(3)));
        let p = store.get().progress;
        assert!(p.game_unlocked && p.size_and_speed_unlocked && p.autoclick_unlocked);
    }

    #[test]
    fn snapshot_json_uses_field_names() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["autoClick"], false);
        assert_eq!(json["bgColor"], "#ffffff");
        assert_eq!(json["displayMode"], "light");
        assert_eq!(json["progress"]["gameUnlocked"], false);
    }

    #[test]
    fn logger_listener_does_not_disturb_state() {
        let store = SettingsStore::default();
        attach_logger(&store);
        store.set(Setting::BgColor("#123456".into()));
        assert_eq!(store.get().bg_color, "#123456");
    }
}
