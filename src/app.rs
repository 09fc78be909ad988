//! Top-level application state: which panels are mounted, the article
//! navigator, and the game session while the Game panel is mounted and
//! unlocked.

use crate::actions::*;
use crate::articles::article_count;
use crate::game::GameSession;
use crate::input::{is_narrow_layout, InputEvent, Key};
use crate::navigator::Navigator;
use crate::panels;
use crate::settings::SettingsStore;
use crate::time::FrameClock;

/// Lines moved per Up/Down press in the article body.
const SCROLL_STEP: u16 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Articles,
    Settings,
    Game,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Articles, Panel::Settings, Panel::Game];

    pub fn label(self) -> &'static str {
        match self {
            Panel::Articles => "Articles",
            Panel::Settings => "Settings",
            Panel::Game => "Game",
        }
    }

    pub fn action_id(self) -> u16 {
        match self {
            Panel::Articles => TAB_ARTICLES,
            Panel::Settings => TAB_SETTINGS,
            Panel::Game => TAB_GAME,
        }
    }

    fn from_action(id: u16) -> Option<Panel> {
        Panel::ALL.into_iter().find(|p| p.action_id() == id)
    }

    fn from_digit(c: char) -> Option<Panel> {
        match c {
            '1' => Some(Panel::Articles),
            '2' => Some(Panel::Settings),
            '3' => Some(Panel::Game),
            _ => None,
        }
    }

    fn next(self) -> Panel {
        match self {
            Panel::Articles => Panel::Settings,
            Panel::Settings => Panel::Game,
            Panel::Game => Panel::Articles,
        }
    }
}

pub struct App {
    pub store: SettingsStore,
    pub navigator: Navigator,
    /// Selected panel in the narrow layout.
    pub panel: Panel,
    pub narrow: bool,
    pub article_scroll: u16,
    pub game: Option<GameSession>,
    clock: FrameClock,
}

impl App {
    pub fn new(store: SettingsStore) -> Self {
        Self {
            navigator: Navigator::new(store.clone(), article_count()),
            store,
            panel: Panel::Articles,
            narrow: false,
            article_scroll: 0,
            game: None,
            clock: FrameClock::new(),
        }
    }

    /// Whether `panel` is on screen. The wide layout shows all three.
    pub fn mounted(&self, panel: Panel) -> bool {
        !self.narrow || self.panel == panel
    }

    /// Mount or unmount the game session to match the layout and progression.
    pub fn sync_mounts(&mut self) {
        let want = self.mounted(Panel::Game) && self.store.with(|s| s.progress.game_unlocked);
        if want && self.game.is_none() {
            self.game = Some(GameSession::mount(self.store.clone()));
        } else if !want {
            self.game = None;
        }
    }

    /// Start of a frame: pick the layout for `width` and advance the clock.
    pub fn frame(&mut self, now_ms: f64, width: u16) {
        self.narrow = is_narrow_layout(width);
        self.sync_mounts();
        let delta = self.clock.update(now_ms);
        self.advance(delta);
    }

    pub fn advance(&mut self, delta_ms: f64) {
        if let Some(game) = &mut self.game {
            game.advance(delta_ms);
        }
    }

    fn select(&mut self, panel: Panel) {
        if self.panel != panel {
            log::debug!("panel {}", panel.label());
            self.panel = panel;
        }
        self.sync_mounts();
    }

    /// Dispatch one event. `scroll_max` bounds article scrolling, as measured by
    /// the last render.
    pub fn handle_input(&mut self, event: &InputEvent, scroll_max: u16) -> bool {
        match event {
            InputEvent::Key(Key::Tab) if self.narrow => {
                self.select(self.panel.next());
                return true;
            }
            InputEvent::Key(Key::Char(c)) => {
                if let Some(panel) = Panel::from_digit(*c) {
                    self.select(panel);
                    return true;
                }
            }
            InputEvent::Click(id) => {
                if let Some(panel) = Panel::from_action(*id) {
                    self.select(panel);
                    return true;
                }
            }
            _ => {}
        }

        if self.mounted(Panel::Articles) && self.handle_article_input(event, scroll_max) {
            return true;
        }
        if self.mounted(Panel::Settings) && panels::handle_input(event, &self.store) {
            return true;
        }
        match &mut self.game {
            Some(game) => game.handle_input(event),
            None => false,
        }
    }

    fn handle_article_input(&mut self, event: &InputEvent, scroll_max: u16) -> bool {
        let moved = match event {
            InputEvent::Key(Key::Right) | InputEvent::Click(ARTICLE_NEXT) => self.navigator.next(),
            InputEvent::Key(Key::Left) | InputEvent::Click(ARTICLE_BACK) => self.navigator.back(),
            InputEvent::Click(id)
                if (ARTICLE_TAB_BASE..ARTICLE_TAB_BASE + self.navigator.count() as u16)
                    .contains(id) =>
            {
                self.navigator.go_to((id - ARTICLE_TAB_BASE) as usize)
            }
            InputEvent::Key(Key::Up) => {
                self.article_scroll = self.article_scroll.saturating_sub(SCROLL_STEP);
                return true;
            }
            InputEvent::Key(Key::Down) => {
                self.article_scroll = (self.article_scroll + SCROLL_STEP).min(scroll_max);
                return true;
            }
            _ => return false,
        };
        if moved {
            self.article_scroll = 0;
            self.sync_mounts();
        }
        // Arrow presses at a bound are still consumed.
        true
    }
}
