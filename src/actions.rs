//! Semantic action IDs for click targets.
//!
//! Registered during render and dispatched as `InputEvent::Click`.

// ── Game ────────────────────────────────────────────────────────
pub const GAME_TARGET: u16 = 0;

// ── Panel tabs (narrow layout) ──────────────────────────────────
pub const TAB_ARTICLES: u16 = 10;
pub const TAB_SETTINGS: u16 = 11;
pub const TAB_GAME: u16 = 12;

// ── Article navigation ──────────────────────────────────────────
pub const ARTICLE_BACK: u16 = 20;
pub const ARTICLE_NEXT: u16 = 21;
/// Base + article index.
pub const ARTICLE_TAB_BASE: u16 = 100;

// ── Settings ────────────────────────────────────────────────────
pub const TOGGLE_DISPLAY_MODE: u16 = 200;

pub const SPEED_DOWN_COARSE: u16 = 210;
pub const SPEED_DOWN: u16 = 211;
pub const SPEED_UP: u16 = 212;
pub const SPEED_UP_COARSE: u16 = 213;

pub const SIZE_DOWN_COARSE: u16 = 220;
pub const SIZE_DOWN: u16 = 221;
pub const SIZE_UP: u16 = 222;
pub const SIZE_UP_COARSE: u16 = 223;

pub const TOGGLE_AUTOCLICK: u16 = 230;

/// Base + swatch index.
pub const COLOR_SWATCH_BASE: u16 = 300;
