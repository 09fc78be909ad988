//! Button game rules: pure state transitions, no rendering or timers.

use super::state::{ButtonGame, Position, POSITION_SPAN};

/// Pick a new spot for the target in `0..POSITION_SPAN` on both axes. The
/// target always moves: a draw of the current spot is nudged one step right.
pub fn relocate(state: &mut ButtonGame) {
    let x = (state.rng.gen() % POSITION_SPAN) as u8;
    let y = (state.rng.gen() % POSITION_SPAN) as u8;
    let mut next = Position { x, y };
    if next == state.position {
        next.x = ((u32::from(x) + 1) % POSITION_SPAN) as u8;
    }
    state.position = next;
    state.relocations += 1;
    // The target left the pointer behind; a new enter is needed to count again.
    state.pointer_inside = false;
}

/// Timer fired `fires` times. Moves the target only; score is untouched.
pub fn on_timer(state: &mut ButtonGame, fires: u32) {
    for _ in 0..fires {
        relocate(state);
    }
}

/// Explicit click on the target, counted whether or not autoclick is on.
pub fn click(state: &mut ButtonGame) {
    state.score += 1;
    relocate(state);
}

/// Pointer moved; `inside` tells whether it is over the target now.
///
/// Crossing into the target counts as a click when `auto_click` is on.
/// Returns true if that scored.
pub fn pointer_moved(state: &mut ButtonGame, inside: bool, auto_click: bool) -> bool {
    let entered = inside && !state.pointer_inside;
    state.pointer_inside = inside;
    if entered && auto_click {
        click(state);
        return true;
    }
    false
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_relocation_stays_in_bounds(seed in any::<u32>(), n in 1u32..200) {
            let mut g = ButtonGame::new(seed);
            for _ in 0..n {
                let before = g.position;
                relocate(&mut g);
                prop_assert!(u32::from(g.position.x) < POSITION_SPAN);
                prop_assert!(u32::from(g.position.y) < POSITION_SPAN);
                prop_assert_ne!(g.position, before);
            }
        }

        #[test]
        fn prop_score_counts_clicks_and_entries_only(
            seed in any::<u32>(),
            ops in proptest::collection::vec((0u8..3, any::<bool>()), 0..80),
            auto_click in any::<bool>(),
        ) {
            let mut g = ButtonGame::new(seed);
            let mut expected = 0u64;
            for (op, inside) in ops {
                match op {
                    0 => on_timer(&mut g, 1),
                    1 => { click(&mut g); expected += 1; }
                    _ => {
                        if pointer_moved(&mut g, inside, auto_click) {
                            expected += 1;
                        }
                    }
                }
                prop_assert_eq!(g.score, expected);
            }
            if !auto_click {
                // Hovering alone never scores without autoclick.
                let mut h = ButtonGame::new(seed);
                for _ in 0..10 {
                    prop_assert!(!pointer_moved(&mut h, true, false));
                    pointer_moved(&mut h, false, false);
                }
                prop_assert_eq!(h.score, 0);
            }
        }
    }
}
