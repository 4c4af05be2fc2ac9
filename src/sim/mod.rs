//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{player_contact, resolve_bullet_hits};
pub use state::{Bullet, Enemy, GameEvent, GamePhase, GameState, Player, Star};
pub use tick::{TickInput, tick};
