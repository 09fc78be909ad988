//! The button game: a target that jumps around on a timer and scores on
//! click, or on hover when autoclick is enabled.

pub mod logic;
pub mod render;
pub mod state;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::actions::GAME_TARGET;
use crate::input::{ClickState, InputEvent, Key};
use crate::settings::{ListenerId, Setting, SettingsStore};
use crate::time::IntervalTimer;

use state::ButtonGame;

/// A mounted game view: its state plus the relocation timer.
///
/// The timer lives exactly as long as the session. Dropping the session
/// (unmounting the view) cancels it and detaches the speed listener; a speed
/// change re-arms it.
pub struct GameSession {
    pub state: ButtonGame,
    timer: IntervalTimer,
    store: SettingsStore,
    speed_listener: ListenerId,
    speed_changed: Rc<Cell<bool>>,
    /// `state.relocations` as of the last render. Pointer hits on
    /// `GAME_TARGET` refer to that drawing and go stale once the target moves.
    drawn_at: Cell<u64>,
}

impl GameSession {
    pub fn mount(store: SettingsStore) -> Self {
        Self::with_seed(store, state::session_seed())
    }

    pub fn with_seed(store: SettingsStore, seed: u32) -> Self {
        let speed = store.with(|s| s.speed);
        let speed_changed = Rc::new(Cell::new(false));
        let speed_listener = store.subscribe({
            let speed_changed = Rc::clone(&speed_changed);
            move |_, change| {
                if let Setting::Speed(_) = change {
                    speed_changed.set(true);
                }
            }
        });
        log::info!("game mounted (interval {speed}ms)");
        Self {
            state: ButtonGame::new(seed),
            timer: IntervalTimer::new(speed),
            store,
            speed_listener,
            speed_changed,
            drawn_at: Cell::new(0),
        }
    }

    #[cfg(test)]
    pub fn timer(&self) -> &IntervalTimer {
        &self.timer
    }

    /// Replace the timer if `speed` was set since the last check.
    pub fn sync_speed(&mut self) {
        if !self.speed_changed.replace(false) {
            return;
        }
        let speed = self.store.with(|s| s.speed).max(1);
        if self.timer.period() != Some(speed) {
            log::debug!("relocation interval {:?} -> {speed}ms", self.timer.period());
            self.timer.rearm(speed);
        }
    }

    /// Let `delta_ms` of wall time pass.
    pub fn advance(&mut self, delta_ms: f64) {
        self.sync_speed();
        let fires = self.timer.advance(delta_ms);
        if fires > 1 {
            log::debug!("{fires} relocations in one {delta_ms:.0}ms frame");
        }
        if fires > 0 {
            logic::on_timer(&mut self.state, fires);
        }
    }

    /// Record that the target has been drawn at its current position.
    pub fn mark_drawn(&self) {
        self.drawn_at.set(self.state.relocations);
    }

    /// Whether the on-screen target is where the game state has it.
    fn target_is_current(&self) -> bool {
        self.drawn_at.get() == self.state.relocations
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Click(GAME_TARGET) if self.target_is_current() => {
                logic::click(&mut self.state);
                true
            }
            InputEvent::Key(Key::Enter | Key::Char(' ')) => {
                logic::click(&mut self.state);
                true
            }
            InputEvent::PointerMove(hit) => {
                let inside = *hit == Some(GAME_TARGET) && self.target_is_current();
                let auto_click = self.store.with(|s| s.auto_click);
                logic::pointer_moved(&mut self.state, inside, auto_click)
            }
            _ => false,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        let settings = self.store.get();
        render::render(&self.state, &settings, f, area, click_state);
        self.mark_drawn();
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        self.timer.cancel();
        self.store.unsubscribe(self.speed_listener);
        log::info!(
            "game unmounted (score {}, {} timer relocations)",
            self.state.score,
            self.timer.fired()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (GameSession, SettingsStore) {
        let store = SettingsStore::default();
        (GameSession::with_seed(store.clone(), 42), store)
    }

    #[test]
    fn timer_armed_with_current_speed() {
        let (g, _) = session();
        assert_eq!(g.timer().period(), Some(100));
    }

    #[test]
    fn relocates_every_interval() {
        let (mut g, _) = session();
        g.advance(99.0);
        assert_eq!(g.state.relocations, 0);
        g.advance(1.0);
        assert_eq!(g.state.relocations, 1);
        g.advance(300.0);
        assert_eq!(g.state.relocations, 4);
        assert_eq!(g.state.score, 0);
    }

    #[test]
    fn speed_change_rearms() {
        let (mut g, store) = session();
        g.advance(90.0);
        store.set(Setting::Speed(250));
        g.advance(10.0); // would have fired under the old 100ms period
        assert_eq!(g.timer().period(), Some(250));
        assert_eq!(g.state.relocations, 0);
        g.advance(240.0);
        assert_eq!(g.state.relocations, 1);
    }

    #[test]
    fn click_scores_regardless_of_autoclick() {
        let (mut g, store) = session();
        assert!(g.handle_input(&InputEvent::Click(GAME_TARGET)));
        g.mark_drawn();
        store.set(Setting::AutoClick(true));
        assert!(g.handle_input(&InputEvent::Click(GAME_TARGET)));
        assert_eq!(g.state.score, 2);
    }

    #[test]
    fn hits_on_old_drawing_ignored_until_redrawn() {
        let (mut g, store) = session();
        store.set(Setting::AutoClick(true));
        assert!(g.handle_input(&InputEvent::PointerMove(Some(GAME_TARGET))));
        // Pointer still over the spot the target just left.
        assert!(!g.handle_input(&InputEvent::PointerMove(Some(GAME_TARGET))));
        assert!(!g.handle_input(&InputEvent::Click(GAME_TARGET)));
        assert_eq!(g.state.score, 1);

        g.mark_drawn();
        assert!(g.handle_input(&InputEvent::Click(GAME_TARGET)));
        assert_eq!(g.state.score, 2);
    }

    #[test]
    fn timer_moves_make_hits_stale() {
        let (mut g, _) = session();
        g.advance(100.0);
        assert!(!g.handle_input(&InputEvent::Click(GAME_TARGET)));
        assert!(g.handle_input(&InputEvent::Key(Key::Enter)));
        assert_eq!(g.state.score, 1);
    }

    #[test]
    fn unmount_detaches_speed_listener() {
        let store = SettingsStore::default();
        let before = store.listener_count();
        let g = GameSession::with_seed(store.clone(), 1);
        assert_eq!(store.listener_count(), before + 1);
        drop(g);
        assert_eq!(store.listener_count(), before);
        store.set(Setting::Speed(300));
    }

    #[test]
    fn same_speed_keeps_progress() {
        let (mut g, store) = session();
        g.advance(60.0);
        store.set(Setting::Speed(100));
        g.advance(40.0);
        assert_eq!(g.state.relocations, 1);
    }

    #[test]
    fn keyboard_activates_target() {
        let (mut g, _) = session();
        g.handle_input(&InputEvent::Key(Key::Enter));
        g.handle_input(&InputEvent::Key(Key::Char(' ')));
        assert_eq!(g.state.score, 2);
    }

    #[test]
    fn hover_follows_autoclick_setting() {
        let (mut g, store) = session();
        let start = g.state.position;
        assert!(!g.handle_input(&InputEvent::PointerMove(Some(GAME_TARGET))));
        assert_eq!(g.state.score, 0);
        assert_eq!(g.state.position, start);

        g.handle_input(&InputEvent::PointerMove(None));
        store.set(Setting::AutoClick(true));
        assert!(g.handle_input(&InputEvent::PointerMove(Some(GAME_TARGET))));
        assert_eq!(g.state.score, 1);
    }

    #[test]
    fn autoclick_does_not_score_on_ticks() {
        let (mut g, store) = session();
        store.set(Setting::AutoClick(true));
        g.advance(1_000.0);
        assert_eq!(g.state.relocations, 10);
        assert_eq!(g.state.score, 0);
    }

    #[test]
    fn other_clicks_ignored() {
        let (mut g, _) = session();
        assert!(!g.handle_input(&InputEvent::Click(GAME_TARGET + 1)));
        assert!(!g.handle_input(&InputEvent::Key(Key::Left)));
    }
}
