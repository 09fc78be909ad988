//! Settings panels. Each panel appears once its progression point is
//! unlocked; Display is always shown.

pub mod autoclick;
pub mod color_picker;
pub mod display;
pub mod size_and_speed;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::Style;
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::settings::{Settings, SettingsStore};
use crate::theme::Palette;
use crate::widgets::ClickableList;

/// Build the lines of every visible panel, separated by blank rows.
pub fn build<'a>(settings: &Settings, palette: &Palette) -> ClickableList<'a> {
    let mut cl = ClickableList::new();
    display::build(settings, palette, &mut cl);

    if size_and_speed::visible(settings) {
        cl.push(Line::from(""));
        size_and_speed::build(settings, palette, &mut cl);
    }
    if autoclick::visible(settings) {
        cl.push(Line::from(""));
        autoclick::build(settings, palette, &mut cl);
    }
    if color_picker::visible(settings) {
        cl.push(Line::from(""));
        color_picker::build(settings, palette, &mut cl);
    }
    if !size_and_speed::visible(settings) {
        cl.push(Line::from(""));
        cl.push(Line::from(Span::styled(
            "Read on to unlock more settings.",
            palette.dim(),
        )));
    }
    cl
}

pub fn render(settings: &Settings, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let palette = Palette::for_mode(settings.display_mode);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(palette.text())
        .title(" Settings ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cl = build(settings, &palette);
    cl.register_targets(inner, cs);
    f.render_widget(Paragraph::new(cl.into_lines()), inner);
}

/// Route an event to the visible panels. Locked panels ignore their keys
/// and clicks.
pub fn handle_input(event: &InputEvent, store: &SettingsStore) -> bool {
    let settings = store.get();
    if display::handle_input(event, &settings, store) {
        return true;
    }
    if size_and_speed::visible(&settings) && size_and_speed::handle_input(event, &settings, store) {
        return true;
    }
    if autoclick::visible(&settings) && autoclick::handle_input(event, &settings, store) {
        return true;
    }
    color_picker::visible(&settings) && color_picker::handle_input(event, store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::*;
    use crate::input::Key;
    use crate::progression::progression_for;
    use crate::settings::Setting;

    fn store_at(highest: usize) -> SettingsStore {
        let store = SettingsStore::default();
        store.set(Setting::Progress(progression_for(highest)));
        store
    }

    #[test]
    fn locked_panels_ignore_input() {
        let store = store_at(0);
        assert!(!handle_input(&InputEvent::Click(SPEED_UP), &store));
        assert!(!handle_input(&InputEvent::Key(Key::Char('a')), &store));
        assert!(!handle_input(&InputEvent::Click(COLOR_SWATCH_BASE), &store));
        assert_eq!(store.get().speed, 100);
        assert!(!store.get().auto_click);
    }

    #[test]
    fn display_always_available() {
        let store = store_at(0);
        assert!(handle_input(&InputEvent::Click(TOGGLE_DISPLAY_MODE), &store));
    }

    #[test]
    fn unlocked_panels_respond() {
        let store = store_at(4);
        assert!(handle_input(&InputEvent::Click(SPEED_UP), &store));
        assert!(handle_input(&InputEvent::Key(Key::Char('a')), &store));
        assert!(handle_input(&InputEvent::Click(COLOR_SWATCH_BASE + 1), &store));
        let s = store.get();
        assert_eq!(s.speed, 110);
        assert!(s.auto_click);
        assert_ne!(s.bg_color, "#ffffff");
    }

    #[test]
    fn build_grows_with_progression() {
        let palette = Palette::for_mode(Default::default());
        let locked = build(&store_at(0).get(), &palette).len();
        let partial = build(&store_at(2).get(), &palette).len();
        let full = build(&store_at(4).get(), &palette).len();
        assert!(locked < partial);
        assert!(partial < full);
    }
}
