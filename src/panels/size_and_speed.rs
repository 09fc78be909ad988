//! Movement delay and target size sliders.

use std::ops::RangeInclusive;

use ratzilla::ratatui::style::Modifier;
use ratzilla::ratatui::text::{Line, Span};

use crate::actions::*;
use crate::input::{InputEvent, Key};
use crate::settings::{Setting, Settings, SettingsStore};
use crate::theme::Palette;
use crate::widgets::ClickableList;

pub const SPEED_RANGE: RangeInclusive<u32> = 1..=1000;
pub const SIZE_RANGE: RangeInclusive<u32> = 15..=100;

const SPEED_STEP: i64 = 10;
const SPEED_STEP_COARSE: i64 = 100;
const SIZE_STEP: i64 = 1;
const SIZE_STEP_COARSE: i64 = 5;

/// Cells in the slider track.
const TRACK_WIDTH: usize = 12;

pub fn visible(settings: &Settings) -> bool {
    settings.progress.size_and_speed_unlocked
}

/// Move `value` by `delta`, clamped into `range`.
pub fn step(value: u32, delta: i64, range: &RangeInclusive<u32>) -> u32 {
    let moved = (value as i64 + delta).clamp(*range.start() as i64, *range.end() as i64);
    moved as u32
}

fn track(value: u32, range: &RangeInclusive<u32>) -> String {
    let span = (range.end() - range.start()).max(1) as usize;
    let filled = (value.saturating_sub(*range.start()) as usize * TRACK_WIDTH).div_ceil(span);
    let filled = filled.min(TRACK_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(TRACK_WIDTH - filled))
}

pub fn build(settings: &Settings, palette: &Palette, cl: &mut ClickableList) {
    let title = palette.highlight().add_modifier(Modifier::BOLD);
    let button = palette.highlight();

    cl.push(Line::from(Span::styled("Size and Speed", title)));

    cl.push(Line::from(Span::styled(
        format!("Movement delay (ms): {}", settings.speed),
        palette.text(),
    )));
    cl.push(Line::from(Span::styled(track(settings.speed, &SPEED_RANGE), palette.dim())));
    cl.push_buttons(
        &[
            ("[«]", button, SPEED_DOWN_COARSE),
            ("[-]", button, SPEED_DOWN),
            ("[+]", button, SPEED_UP),
            ("[»]", button, SPEED_UP_COARSE),
        ],
        " ",
    );

    cl.push(Line::from(Span::styled(
        format!("Button size (px): {}", settings.size),
        palette.text(),
    )));
    cl.push(Line::from(Span::styled(track(settings.size, &SIZE_RANGE), palette.dim())));
    cl.push_buttons(
        &[
            ("[«]", button, SIZE_DOWN_COARSE),
            ("[-]", button, SIZE_DOWN),
            ("[+]", button, SIZE_UP),
            ("[»]", button, SIZE_UP_COARSE),
        ],
        " ",
    );
    cl.push(Line::from(Span::styled("keys: - = speed, [ ] size", palette.dim())));
}

pub fn handle_input(event: &InputEvent, settings: &Settings, store: &SettingsStore) -> bool {
    let speed = |delta| Setting::Speed(step(settings.speed, delta, &SPEED_RANGE));
    let size = |delta| Setting::Size(step(settings.size, delta, &SIZE_RANGE));

    let change = match event {
        InputEvent::Click(SPEED_DOWN_COARSE) => speed(-SPEED_STEP_COARSE),
        InputEvent::Click(SPEED_DOWN) | InputEvent::Key(Key::Char('-')) => speed(-SPEED_STEP),
        InputEvent::Click(SPEED_UP) | InputEvent::Key(Key::Char('=')) => speed(SPEED_STEP),
        InputEvent::Click(SPEED_UP_COARSE) => speed(SPEED_STEP_COARSE),
        InputEvent::Click(SIZE_DOWN_COARSE) => size(-SIZE_STEP_COARSE),
        InputEvent::Click(SIZE_DOWN) | InputEvent::Key(Key::Char('[')) => size(-SIZE_STEP),
        InputEvent::Click(SIZE_UP) | InputEvent::Key(Key::Char(']')) => size(SIZE_STEP),
        InputEvent::Click(SIZE_UP_COARSE) => size(SIZE_STEP_COARSE),
        _ => return false,
    };
    store.set(change);
    true
}
