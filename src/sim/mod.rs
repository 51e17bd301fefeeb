//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order
//! - No rendering or platform dependencies

pub mod aabb;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use state::{
    Bullet, Enemy, GameEvent, GamePhase, GameState, Particle, Player, PowerUp, ENEMY_KINDS,
    MAX_PARTICLES,
};
pub use tick::{spawn_wave, tick, TickInput};
