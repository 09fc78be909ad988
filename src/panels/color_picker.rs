//! Game background colour picker.

use ratzilla::ratatui::style::{Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};

use crate::actions::COLOR_SWATCH_BASE;
use crate::input::InputEvent;
use crate::settings::{Setting, Settings, SettingsStore};
use crate::theme::{parse_hex_color, Palette, SWATCHES};
use crate::widgets::ClickableList;

pub fn visible(settings: &Settings) -> bool {
    settings.progress.color_picker_unlocked
}

pub fn build(settings: &Settings, palette: &Palette, cl: &mut ClickableList) {
    cl.push(Line::from(Span::styled(
        "Color Picker",
        palette.highlight().add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled("Background color:", palette.text())));

    for (i, (hex, name)) in SWATCHES.iter().enumerate() {
        let Some(color) = parse_hex_color(hex) else {
            continue;
        };
        let chosen = settings.bg_color.eq_ignore_ascii_case(hex);
        let label_style = if chosen {
            palette.highlight().add_modifier(Modifier::BOLD)
        } else {
            palette.text()
        };
        cl.push_clickable(
            Line::from(vec![
                Span::styled(if chosen { "▶ " } else { "  " }, label_style),
                Span::styled("   ", Style::default().bg(color)),
                Span::styled(format!(" {name} {hex}"), label_style),
            ]),
            COLOR_SWATCH_BASE + i as u16,
        );
    }
}

pub fn handle_input(event: &InputEvent, store: &SettingsStore) -> bool {
    let InputEvent::Click(id) = event else {
        return false;
    };
    let Some(index) = id.checked_sub(COLOR_SWATCH_BASE) else {
        return false;
    };
    match SWATCHES.get(index as usize) {
        Some((hex, _)) => {
            store.set(Setting::BgColor(hex.to_string()));
            true
        }
        None => false,
    }
}
