//! Root layout: three panels side by side, or one at a time behind a tab
//! strip on narrow screens.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::actions::{ARTICLE_BACK, ARTICLE_NEXT, ARTICLE_TAB_BASE};
use crate::app::{App, Panel};
use crate::articles::{self, article};
use crate::input::ClickState;
use crate::panels;
use crate::theme::Palette;
use crate::widgets::{ClickableList, TabBar};

/// Width of the settings column in the wide layout.
const SETTINGS_WIDTH: u16 = 30;

pub fn render(app: &App, f: &mut Frame, click_state: &Rc<RefCell<ClickState>>) {
    let settings = app.store.get();
    let palette = Palette::for_mode(settings.display_mode);
    let size = f.area();

    f.render_widget(Block::default().style(palette.text()), size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(size);

    if app.narrow {
        let mut tabs = TabBar::new("│", palette.dim(), palette.highlight());
        for (i, panel) in Panel::ALL.into_iter().enumerate() {
            tabs = tabs.tab(
                format!("{} {}", i + 1, panel.label()),
                panel.action_id(),
                app.panel == panel,
            );
        }
        tabs.render(f, chunks[0], &mut click_state.borrow_mut());
        render_panel(app, app.panel, &palette, f, chunks[1], click_state);
    } else {
        render_title(&palette, f, chunks[0]);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(SETTINGS_WIDTH),
                Constraint::Min(10),
            ])
            .split(chunks[1]);
        for (panel, area) in Panel::ALL.into_iter().zip(columns.iter()) {
            render_panel(app, panel, &palette, f, *area, click_state);
        }
    }
}

fn render_title(palette: &Palette, f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Accessible Games",
        palette.highlight().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn render_panel(
    app: &App,
    panel: Panel,
    palette: &Palette,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    match panel {
        Panel::Articles => render_articles(app, palette, f, area, &mut click_state.borrow_mut()),
        Panel::Settings => {
            let settings = app.store.get();
            panels::render(&settings, f, area, &mut click_state.borrow_mut());
        }
        Panel::Game => match &app.game {
            Some(game) => game.render(f, area, click_state),
            None => render_game_locked(palette, f, area),
        },
    }
}

fn panel_block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(palette.text())
        .title(title)
}

fn render_game_locked(palette: &Palette, f: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Line::from(Span::styled(
        "Read the next article to unlock the game.",
        palette.dim(),
    )))
    .block(panel_block(" Game ", palette))
    .wrap(Wrap { trim: false });
    f.render_widget(hint, area);
}

fn article_lines(content: &[&[articles::Span]], palette: &Palette) -> Vec<Line<'static>> {
    content
        .iter()
        .map(|line| {
            Line::from(
                line.iter()
                    .map(|span| match *span {
                        articles::Span::Plain(text) => Span::styled(text, palette.text()),
                        articles::Span::Bold(text) => {
                            Span::styled(text, palette.text().add_modifier(Modifier::BOLD))
                        }
                        articles::Span::Underline(text) => {
                            Span::styled(text, palette.text().add_modifier(Modifier::UNDERLINED))
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

fn render_articles(app: &App, palette: &Palette, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let nav = &app.navigator;
    let block = panel_block(" Articles ", palette);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(current) = article(nav.current()) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // article tabs
            Constraint::Length(2), // title + spacer
            Constraint::Min(1),    // body
            Constraint::Length(1), // back / next
        ])
        .split(inner);

    let mut tabs = TabBar::new("│", palette.dim(), palette.highlight());
    for i in 0..nav.count() {
        tabs = tabs.tab(
            format!("{}", i + 1),
            ARTICLE_TAB_BASE + i as u16,
            i == nav.current(),
        );
    }
    tabs.render(f, chunks[0], cs);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(current.title, palette.highlight().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  ({}/{})", nav.current() + 1, nav.count()),
            palette.dim(),
        ),
    ]));
    f.render_widget(title, chunks[1]);

    let body = Paragraph::new(article_lines(current.content, palette)).wrap(Wrap { trim: false });
    let total = body.line_count(chunks[2].width);
    let scroll_max = (total.saturating_sub(chunks[2].height as usize)).min(u16::MAX as usize) as u16;
    cs.article_scroll_max = scroll_max;
    f.render_widget(body.scroll((app.article_scroll.min(scroll_max), 0)), chunks[2]);

    let button = palette.highlight().add_modifier(Modifier::BOLD);
    let mut buttons = Vec::new();
    if !nav.is_first() {
        buttons.push(("[← Back]", button, ARTICLE_BACK));
    }
    if !nav.is_last() {
        buttons.push(("[Next →]", button, ARTICLE_NEXT));
    }
    let mut cl = ClickableList::new();
    cl.push_buttons(&buttons, "  ");
    cl.register_targets(chunks[3], cs);
    f.render_widget(Paragraph::new(cl.into_lines()), chunks[3]);
}
