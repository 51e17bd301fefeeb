//! Game state and core simulation types
//!
//! Everything the renderer and audio shell consume lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::aabb::Aabb;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Attract screen, waiting for fire input
    Title,
    /// Active gameplay
    Playing,
    /// Session ended, awaiting restart input
    GameOver,
}

/// Discrete audio triggers, drained by the shell once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Laser,
    Hit,
    Explosion,
    PowerUp,
}

/// Number of enemy variants
pub const ENEMY_KINDS: u8 = 4;

/// Maximum particles kept alive at once (oldest evicted first)
pub const MAX_PARTICLES: usize = 256;

/// Hitbox padding from the sprite glow halo (4 px per glow layer per side)
const GLOW_HALO: f32 = 24.0;

/// Player ship hitbox (36x22 core sprite plus halo)
pub const PLAYER_HITBOX: Vec2 = Vec2::new(60.0, 46.0);
/// Bullet hitbox (4x18 core sprite plus a thinner halo)
pub const BULLET_HITBOX: Vec2 = Vec2::new(20.0, 34.0);
/// Power-up hitbox (radius-10 orb plus halo)
pub const POWERUP_HITBOX: Vec2 = Vec2::new(38.0, 38.0);

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Horizontal speed in px/s
    pub speed: f32,
    /// Seconds until the next shot is allowed
    pub cooldown: f32,
    /// Simultaneous bullets per shot (1..=MULTISHOT_MAX)
    pub multishot: u8,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(WIDTH / 2.0, HEIGHT - PLAYER_BOTTOM_OFFSET),
            speed: PLAYER_SPEED,
            cooldown: 0.0,
            multishot: 1,
        }
    }
}

impl Player {
    /// Apply horizontal intent (-1..1) and tick the cooldown down
    pub fn update(&mut self, intent: f32, dt: f32) {
        self.pos.x += intent.clamp(-1.0, 1.0) * self.speed * dt;
        self.pos.x = self.pos.x.clamp(PLAYER_MARGIN, WIDTH - PLAYER_MARGIN);
        self.cooldown = (self.cooldown - dt).max(0.0);
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_center_size(self.pos, PLAYER_HITBOX)
    }
}

/// A player bullet
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    /// Vertical velocity in px/s (negative is up)
    pub vel_y: f32,
    pub alive: bool,
}

impl Bullet {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel_y: BULLET_SPEED,
            alive: true,
        }
    }

    /// Move upward; dies once fully off the top of the screen
    pub fn update(&mut self, dt: f32) {
        self.pos.y += self.vel_y * dt;
        if self.pos.y < -40.0 {
            self.alive = false;
        }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_center_size(self.pos, BULLET_HITBOX)
    }
}

/// An invader
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    /// Vertical anchor the wobble oscillates around; drifts downward
    pub base_y: f32,
    /// Variant index 0..ENEMY_KINDS, sets size, color, wobble and sway
    pub kind: u8,
    /// Per-enemy phase offset so the swarm doesn't move in lockstep
    pub phase: f32,
    pub alive: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, kind: u8, phase: f32) -> Self {
        Self {
            pos,
            base_y: pos.y,
            kind,
            phase,
            alive: true,
        }
    }

    /// Core sprite edge length (hitbox adds the glow halo)
    #[inline]
    pub fn size(&self) -> f32 {
        22.0 + 4.0 * self.kind as f32
    }

    /// Vertical wobble amplitude
    #[inline]
    fn wobble(&self) -> f32 {
        8.0 + 2.0 * self.kind as f32
    }

    /// Horizontal sway rate; faster kinds sway harder
    #[inline]
    fn sway(&self) -> f32 {
        (40.0 + 10.0 * self.kind as f32) / 2.0
    }

    /// Sinusoidal wobble around the drifting base offset
    pub fn update(&mut self, dt: f32, t: f32) {
        self.phase += dt;
        self.pos.y = self.base_y + (t * 2.0 + self.pos.x * 0.01).sin() * self.wobble();
        self.pos.x += (t * 0.7 + self.phase * 0.6).sin() * self.sway() * dt;
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.size() + GLOW_HALO))
    }
}

/// A falling multishot upgrade orb
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub pos: Vec2,
    /// Fixed fall speed in px/s
    pub fall_speed: f32,
    pub alive: bool,
}

impl PowerUp {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            fall_speed: POWERUP_FALL_SPEED,
            alive: true,
        }
    }

    /// Fall; dies once fully off the bottom of the screen
    pub fn update(&mut self, dt: f32) {
        self.pos.y += self.fall_speed * dt;
        if self.pos.y > HEIGHT + 20.0 {
            self.alive = false;
        }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_center_size(self.pos, POWERUP_HITBOX)
    }
}

/// A short-lived explosion fragment (visual only, never affects gameplay)
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32,
    pub life: f32,
    /// Enemy kind index for color lookup
    pub kind: u8,
    pub radius: f32,
}

impl Particle {
    /// Ballistic motion with gravity-like pull
    pub fn update(&mut self, dt: f32) {
        self.age += dt;
        self.pos += self.vel * dt;
        self.vel.y += PARTICLE_GRAVITY * dt;
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.age >= self.life
    }

    /// Remaining-life fraction, for alpha fade
    #[inline]
    pub fn fade(&self) -> f32 {
        (1.0 - self.age / self.life).clamp(0.0, 1.0)
    }
}

/// Complete session state (deterministic given seed + input trace)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// All in-core randomness draws from this
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub score: u64,
    pub lives: u8,
    /// Current wave number (1-based)
    pub wave: u32,
    /// Screen shake magnitude in pixels
    pub shake: f32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    /// Audio triggers queued this tick, drained by the shell
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session in the title phase. The caller spawns the
    /// first wave (see `spawn_wave`) so the attract screen has a swarm.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            time_ticks: 0,
            score: 0,
            lives: 3,
            wave: 1,
            shake: 0.0,
            player: Player::default(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Elapsed session time in seconds
    #[inline]
    pub fn time_secs(&self) -> f32 {
        self.time_ticks as f32 * SIM_DT
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the queued audio triggers to the shell
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Burst explosion particles at an enemy's position in its color
    pub fn spawn_particle_burst(&mut self, pos: Vec2, kind: u8) {
        let count = PARTICLE_BUDGET / 6;
        for _ in 0..count {
            if self.particles.len() >= MAX_PARTICLES {
                self.particles.remove(0);
            }
            let vel = Vec2::new(
                self.rng.random_range(-220.0..220.0),
                self.rng.random_range(-240.0..60.0),
            );
            let life = self.rng.random_range(0.4..0.9);
            let radius = self.rng.random_range(1..=3) as f32;
            self.particles.push(Particle {
                pos,
                vel,
                age: 0.0,
                life,
                kind,
                radius,
            });
        }
    }
}
