//! Autoclick switch.

use ratzilla::ratatui::style::Modifier;
use ratzilla::ratatui::text::{Line, Span};

use crate::actions::TOGGLE_AUTOCLICK;
use crate::input::{InputEvent, Key};
use crate::settings::{Setting, Settings, SettingsStore};
use crate::theme::Palette;
use crate::widgets::ClickableList;

pub fn visible(settings: &Settings) -> bool {
    settings.progress.autoclick_unlocked
}

pub fn build(settings: &Settings, palette: &Palette, cl: &mut ClickableList) {
    cl.push(Line::from(Span::styled(
        "Autoclick",
        palette.highlight().add_modifier(Modifier::BOLD),
    )));
    let (mark, state) = if settings.auto_click { ("●", "Yes") } else { ("○", "No") };
    cl.push_clickable(
        Line::from(vec![
            Span::styled(" [A] ", palette.highlight()),
            Span::styled(format!("{mark} Enable autoclick: {state}"), palette.text()),
        ]),
        TOGGLE_AUTOCLICK,
    );
}

pub fn handle_input(event: &InputEvent, settings: &Settings, store: &SettingsStore) -> bool {
    match event {
        InputEvent::Click(TOGGLE_AUTOCLICK) | InputEvent::Key(Key::Char('a')) => {
            store.set(Setting::AutoClick(!settings.auto_click));
            true
        }
        _ => false,
    }
}
