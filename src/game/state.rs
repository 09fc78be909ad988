//! Button game state.

use tachyonfx::SimpleRng;

/// Target coordinates are percentages of the play area, each in `0..POSITION_SPAN`.
pub const POSITION_SPAN: u32 = 90;

/// Top-left corner of the target, as percentages of the play area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

pub struct ButtonGame {
    pub position: Position,
    pub score: u64,
    /// Whether the pointer was over the target at the last move event.
    pub pointer_inside: bool,
    pub relocations: u64,
    pub(super) rng: SimpleRng,
}

impl ButtonGame {
    pub fn new(seed: u32) -> Self {
        Self {
            position: Position::default(),
            score: 0,
            pointer_inside: false,
            relocations: 0,
            rng: SimpleRng::new(seed),
        }
    }
}

/// Seed for a fresh session: random in the browser, fixed elsewhere.
pub fn session_seed() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * u32::MAX as f64) as u32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x5eed_1234
    }
}
