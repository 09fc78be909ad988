//! Clickable UI building blocks.
//!
//! Each component renders and registers its own click targets, so what is
//! drawn and what is clickable cannot drift apart.
//!
//! - [`TabBar`]: a one-row strip of tabs with an active tab.
//! - [`ClickableList`]: lines where some rows, or buttons inside a row, are clickable.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── TabBar ─────────────────────────────────────────────────────

/// A horizontal tab strip.
///
/// ```ignore
/// TabBar::new("│", style, active_style)
///     .tab("Articles", TAB_ARTICLES, true)
///     .tab("Settings", TAB_SETTINGS, false)
///     .render(f, area, &mut cs);
/// ```
pub struct TabBar<'a> {
    tabs: Vec<(String, u16, bool)>,
    separator: &'a str,
    style: Style,
    active_style: Style,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str, style: Style, active_style: Style) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
            style,
            active_style,
        }
    }

    pub fn tab(mut self, label: impl Into<String>, action_id: u16, active: bool) -> Self {
        self.tabs.push((label.into(), action_id, active));
        self
    }

    /// Render into the first row of `area` and register one target per tab.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let strip = Rect { height: area.height.min(1), ..area };
        let sep_width = Line::from(self.separator).width() as u16;
        let mut spans = Vec::new();
        let mut widths = Vec::new();

        for (i, (label, action_id, active)) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.separator, self.style));
            }
            let padded = format!(" {label} ");
            widths.push((Line::from(padded.as_str()).width() as u16, *action_id));
            let style = if *active {
                self.active_style.add_modifier(Modifier::BOLD)
            } else {
                self.style
            };
            spans.push(Span::styled(padded, style));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), strip);
        cs.register_tab_targets(&widths, sep_width, strip);
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// Where in its line a click target sits.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Hit {
    WholeRow,
    Columns { start: u16, width: u16 },
}

/// Lines paired with click actions. Targets follow their line, so inserting
/// lines above a button moves its target with it.
///
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Autoclick"));
/// cl.push_clickable(Line::from(" [A] toggle"), TOGGLE_AUTOCLICK);
/// cl.push_buttons(&[("[-]", style, SPEED_DOWN), ("[+]", style, SPEED_UP)], " ");
/// cl.register_targets(inner, &mut cs);
/// f.render_widget(Paragraph::new(cl.into_lines()), inner);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    targets: Vec<(u16, Hit, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            targets: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a line whose whole row triggers `action_id`.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.targets.push((self.lines.len() as u16, Hit::WholeRow, action_id));
        self.lines.push(line);
    }

    /// Add one row of buttons. Each button is clickable over its own label only.
    pub fn push_buttons(&mut self, buttons: &[(&str, Style, u16)], gap: &'a str) {
        let row = self.lines.len() as u16;
        let gap_width = Line::from(gap).width() as u16;
        let mut spans = Vec::new();
        let mut col = 0u16;
        for (i, (label, style, action_id)) in buttons.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(gap));
                col += gap_width;
            }
            let width = Line::from(*label).width() as u16;
            self.targets.push((row, Hit::Columns { start: col, width }, *action_id));
            spans.push(Span::styled(label.to_string(), *style));
            col += width;
        }
        self.lines.push(Line::from(spans));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register targets for lines rendered unwrapped, top-aligned in `content`.
    /// Rows past the bottom of `content` are clipped.
    pub fn register_targets(&self, content: Rect, cs: &mut ClickState) {
        for &(line, hit, action_id) in &self.targets {
            let row = content.y + line;
            if row >= content.bottom() {
                continue;
            }
            match hit {
                Hit::WholeRow => cs.add_row_target(content, row, action_id),
                Hit::Columns { start, width } => {
                    if start >= content.width {
                        continue;
                    }
                    let width = width.min(content.width - start);
                    cs.add_click_target(Rect::new(content.x + start, row, width, 1), action_id);
                }
            }
        }
    }
}
