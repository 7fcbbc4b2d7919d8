/// Rule constants shared across the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    /// Health ceiling for every unit; fresh units start here.
    pub const MAX_HEALTH: u8 = 100;

    /// Ghost-slide speed during move confirmation, in path steps per
    /// millisecond of frame time.
    pub const GHOST_RATE_PER_MS: f32 = 0.005;
}
