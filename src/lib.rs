//! Nova Raid - a vertical space shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, movement, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio playback and raw input polling are external collaborators:
//! they read post-tick state (or drain one-shot events) and feed intents in
//! through [`sim::TickInput`]. Nothing outside the tick mutates simulation state.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Screen dimensions in pixels, origin top-left, +y downward
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Player ship half-extents
    pub const PLAYER_HALF: Vec2 = Vec2::new(28.0, 20.0);
    /// Gap between the player's bottom edge and the bottom of the screen
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 300.0;

    /// Bullet half-extents and upward speed
    pub const BULLET_HALF: Vec2 = Vec2::new(3.0, 9.0);
    pub const BULLET_SPEED: f32 = 600.0;

    /// Enemy half-extents, fall speed and horizontal drift speed
    pub const ENEMY_HALF: Vec2 = Vec2::new(24.0, 18.0);
    pub const ENEMY_FALL_SPEED: f32 = 120.0;
    pub const ENEMY_SIDE_SPEED: f32 = 90.0;
    /// Ticks between automatic enemy spawns (60 = once per second)
    pub const ENEMY_SPAWN_DELAY: u32 = 60;

    pub const STARTING_LIVES: u8 = 3;
    /// Score awarded per enemy destroyed by a bullet
    pub const KILL_SCORE: u32 = 10;

    /// Decorative starfield
    pub const STAR_COUNT: usize = 64;
    pub const STAR_SPEED: f32 = 40.0;
    pub const STAR_RADIUS_MIN: f32 = 1.0;
    pub const STAR_RADIUS_MAX: f32 = 3.0;
}
