mod actions;
mod app;
mod articles;
mod game;
mod input;
mod navigator;
mod panels;
mod progression;
mod render;
mod settings;
mod theme;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use app::App;
use input::{pixel_to_cell, ClickState, InputEvent, Key};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use settings::{DisplayMode, Setting, SettingsStore};

/// Query the grid container's bounding rect and convert pixel coordinates to a cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_to_cell(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_to_cell(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

/// Mirror the display mode onto the page so the DOM around the grid follows it.
fn apply_display_mode(mode: DisplayMode) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", mode == DisplayMode::Dark) {
        log::warn!("could not set display mode class: {e:?}");
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Enter => Some(Key::Enter),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    {
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        // Fails only if a logger is already installed.
        let _ = console_log::init_with_level(level);
    }

    let store = SettingsStore::default();
    settings::attach_logger(&store);
    apply_display_mode(store.with(|s| s.display_mode));
    store.subscribe(|_, change| {
        if let Setting::DisplayMode(mode) = change {
            apply_display_mode(*mode);
        }
    });

    let app = Rc::new(RefCell::new(App::new(store)));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;
    log::info!("started");

    // Clicks and pointer movement, resolved to action IDs
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            let pressed = mouse_event.event == MouseEventKind::Pressed
                && mouse_event.button == MouseButton::Left;
            let moved = mouse_event.event == MouseEventKind::Moved;
            if !pressed && !moved {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let hit = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                .and_then(|(col, row)| cs.hit_test(col, row));
            let scroll_max = cs.article_scroll_max;
            drop(cs);

            let event = if pressed {
                match hit {
                    Some(id) => InputEvent::Click(id),
                    None => return,
                }
            } else {
                InputEvent::PointerMove(hit)
            };
            app.borrow_mut().handle_input(&event, scroll_max);
        }
    });

    terminal.on_key_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |key_event| {
            let Some(key) = map_key(key_event.code) else {
                return;
            };
            let scroll_max = click_state.borrow().article_scroll_max;
            app.borrow_mut().handle_input(&InputEvent::Key(key), scroll_max);
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            let mut app = app.borrow_mut();
            app.frame(now_ms(), size.width);
            render::render(&app, f, &click_state);
        }
    });

    Ok(())
}
