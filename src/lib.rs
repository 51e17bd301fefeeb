//! Neon Invaders - a wave-defense arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, wave progression)
//! - `renderer`: WebGPU rendering pipeline with neon glow compositing
//! - `audio`: Procedural sound effects via Web Audio oscillators
//! - `settings`: Player preferences and quality presets

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Logical playfield size in pixels
    pub const WIDTH: f32 = 960.0;
    pub const HEIGHT: f32 = 720.0;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Player ship
    pub const PLAYER_SPEED: f32 = 420.0;
    /// Horizontal clamp margin from either screen edge
    pub const PLAYER_MARGIN: f32 = 40.0;
    /// Vertical distance of the ship from the bottom edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 80.0;

    /// Fire cooldowns (seconds); multishot carries a longer cooldown
    pub const FIRE_COOLDOWN: f32 = 0.18;
    pub const FIRE_COOLDOWN_MULTI: f32 = 0.24;
    /// Horizontal pitch between simultaneous bullets
    pub const MULTISHOT_SPREAD: f32 = 12.0;
    pub const MULTISHOT_MAX: u8 = 5;

    /// Bullet vertical velocity (negative is up)
    pub const BULLET_SPEED: f32 = -680.0;

    /// Wave grid
    pub const ENEMY_COLS: u32 = 9;
    pub const ENEMY_ROW_SPACING: f32 = 64.0;
    pub const ENEMY_TOP_OFFSET: f32 = 80.0;
    /// Constant downward drift of every enemy's base offset (px/s)
    pub const ENEMY_DRIFT: f32 = 4.0;
    /// Enemies crossing this line end the session
    pub const INVASION_LINE: f32 = HEIGHT - 140.0;

    /// Power-up fall speed and drop probability per enemy kill
    pub const POWERUP_FALL_SPEED: f32 = 120.0;
    pub const POWERUP_DROP_CHANCE: f32 = 0.07;

    /// Global particle budget; each explosion bursts BUDGET / 6 particles
    pub const PARTICLE_BUDGET: u32 = 120;
    /// Gravity-like downward acceleration on particles (px/s^2)
    pub const PARTICLE_GRAVITY: f32 = 420.0;

    /// Screen shake kick per hit and linear decay per second
    pub const SHAKE_KICK: f32 = 8.0;
    pub const SHAKE_DECAY: f32 = 60.0;

    /// Score awarded per enemy destroyed
    pub const KILL_SCORE: u64 = 10;

    /// Parallax background depth
    pub const STARFIELD_LAYERS: u32 = 3;
}
