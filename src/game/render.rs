//! Button game rendering.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Rect};
use ratzilla::ratatui::style::{Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::actions::GAME_TARGET;
use crate::input::ClickState;
use crate::settings::Settings;
use crate::theme::{contrasting, parse_hex_color, Palette};

use super::state::{ButtonGame, Position};

/// Approximate pixel size of one terminal cell in the DOM grid.
const CELL_WIDTH_PX: u32 = 8;
const CELL_HEIGHT_PX: u32 = 16;

/// Target footprint in cells for a side length in pixels.
pub fn target_cells(size_px: u32) -> (u16, u16) {
    let w = size_px.div_ceil(CELL_WIDTH_PX).max(2);
    let h = size_px.div_ceil(CELL_HEIGHT_PX).max(1);
    (w.min(u16::MAX as u32) as u16, h.min(u16::MAX as u32) as u16)
}

/// Where the target lands inside `field`. Percentages map onto the field and
/// the target is pulled back in if it would overhang an edge.
pub fn target_rect(field: Rect, position: Position, size_px: u32) -> Rect {
    let (w, h) = target_cells(size_px);
    let w = w.min(field.width);
    let h = h.min(field.height);
    let x = (field.width as u32 * position.x as u32 / 100) as u16;
    let y = (field.height as u32 * position.y as u32 / 100) as u16;
    Rect::new(
        field.x + x.min(field.width - w),
        field.y + y.min(field.height - h),
        w,
        h,
    )
}

pub fn render(
    state: &ButtonGame,
    settings: &Settings,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let palette = Palette::for_mode(settings.display_mode);
    let field_bg = parse_hex_color(&settings.bg_color).unwrap_or(palette.bg);
    let target_color = contrasting(field_bg);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(field_bg))
        .title(Line::from(Span::styled(
            format!(" Score: {} ", state.score),
            palette.highlight().add_modifier(Modifier::BOLD),
        )))
        .title_bottom(
            Line::from(Span::styled(
                if settings.auto_click {
                    " hover to score "
                } else {
                    " click or Enter "
                },
                palette.dim(),
            ))
            .alignment(Alignment::Right),
        );
    let field = block.inner(area);
    f.render_widget(block, area);

    if field.width == 0 || field.height == 0 {
        return;
    }

    let target = target_rect(field, state.position, settings.size);
    let button = Paragraph::new("").style(Style::default().bg(target_color));
    f.render_widget(button, target);

    click_state.borrow_mut().add_click_target(target, GAME_TARGET);
}
