//! Input normalisation and click-target hit testing.
//!
//! Keyboard and pointer events from the DOM are turned into [`InputEvent`]s.
//! Pointer events are resolved against the click targets registered by the
//! last render, so every consumer only ever sees semantic action IDs.

use ratzilla::ratatui::layout::Rect;

/// Keys the app reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Tab,
    Enter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(Key),
    /// Primary-button press on a registered target.
    Click(u16),
    /// Pointer moved; carries the target under the pointer, if any.
    PointerMove(Option<u16>),
}

#[derive(Debug, Clone)]
pub struct ClickTarget {
    pub rect: Rect,
    pub action_id: u16,
}

/// State shared between the render pass and the event handlers.
///
/// Render clears and re-registers targets every frame and records the
/// measurements handlers need (terminal size, article scroll bound).
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
    /// Furthest the current article can scroll, measured at the last render.
    pub article_scroll_max: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
            article_scroll_max: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        if rect.width > 0 && rect.height > 0 {
            self.targets.push(ClickTarget { rect, action_id });
        }
    }

    /// Register the full width of `area` at `row`, if the row lies inside it.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.bottom() {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Register one target per tab of a horizontal strip.
    ///
    /// `tabs` holds `(label_width, action_id)` for each rendered label, left to
    /// right, separated by `separator_width` columns. Each target reaches to the
    /// middle of its neighbouring separators; the outer tabs stretch to the
    /// edges of `strip`, so the whole strip is clickable.
    pub fn register_tab_targets(&mut self, tabs: &[(u16, u16)], separator_width: u16, strip: Rect) {
        if tabs.is_empty() || strip.width == 0 {
            return;
        }
        let half_sep = separator_width / 2;
        let mut label_start = 0u16;
        let mut left = 0u16;
        for (i, &(width, action_id)) in tabs.iter().enumerate() {
            let label_end = label_start + width;
            let right = if i + 1 == tabs.len() {
                strip.width
            } else {
                (label_end + half_sep).min(strip.width)
            };
            if right > left {
                self.add_click_target(
                    Rect::new(strip.x + left, strip.y, right - left, strip.height.max(1)),
                    action_id,
                );
            }
            left = right;
            label_start = label_end + separator_width;
        }
    }

    /// Topmost target at a cell. Later registrations sit on top of earlier ones.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets
            .iter()
            .rev()
            .find(|t| t.rect.contains((col, row).into()))
            .map(|t| t.action_id)
    }
}

/// Below this width the panels are shown one at a time behind a tab strip.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 90
}

/// Map a pixel offset inside the grid container to a cell index along one axis.
///
/// Returns `None` for offsets outside the grid or a degenerate grid.
pub fn pixel_to_cell(offset_px: f64, extent_px: f64, cells: u16) -> Option<u16> {
    if extent_px <= 0.0 || cells == 0 || offset_px < 0.0 {
        return None;
    }
    let cell = (offset_px / (extent_px / cells as f64)) as u16;
    (cell < cells).then_some(cell)
}
