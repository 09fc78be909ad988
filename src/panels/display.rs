//! Light/dark display switch. Always available.

use ratzilla::ratatui::style::Modifier;
use ratzilla::ratatui::text::{Line, Span};

use crate::actions::TOGGLE_DISPLAY_MODE;
use crate::input::{InputEvent, Key};
use crate::settings::{Setting, Settings, SettingsStore};
use crate::theme::Palette;
use crate::widgets::ClickableList;

pub fn build(settings: &Settings, palette: &Palette, cl: &mut ClickableList) {
    cl.push(Line::from(Span::styled(
        "Display",
        palette.highlight().add_modifier(Modifier::BOLD),
    )));
    cl.push_clickable(
        Line::from(vec![
            Span::styled(" [D] ", palette.highlight()),
            Span::styled(
                format!("Mode: {} → {}", settings.display_mode.label(), settings.display_mode.toggled().label()),
                palette.text(),
            ),
        ]),
        TOGGLE_DISPLAY_MODE,
    );
}

pub fn handle_input(event: &InputEvent, settings: &Settings, store: &SettingsStore) -> bool {
    match event {
        InputEvent::Click(TOGGLE_DISPLAY_MODE) | InputEvent::Key(Key::Char('d')) => {
            store.set(Setting::DisplayMode(settings.display_mode.toggled()));
            true
        }
        _ => false,
    }
}
