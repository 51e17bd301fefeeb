//! Frame assembly: GameState snapshot -> vertex list
//!
//! Draw order matches the compositing the glow look wants: background stars,
//! then particles under the entities, ship last.

use glam::Vec2;

use super::shapes::{circle, glow_circle, glow_quad};
use super::starfield::Starfield;
use super::vertex::{colors, Vertex};
use crate::settings::Settings;
use crate::sim::GameState;

/// Pseudo-random screen shake jitter, hashed off the tick counter so frames
/// are stable for a given sim state
fn shake_offset(state: &GameState) -> Vec2 {
    if state.shake <= 0.0 {
        return Vec2::ZERO;
    }
    let hash = (state.time_ticks as u32).wrapping_mul(2654435761);
    let jx = ((hash % 1000) as f32 / 1000.0 - 0.5) * 2.0 * state.shake;
    let jy = (((hash >> 10) % 1000) as f32 / 1000.0 - 0.5) * 2.0 * state.shake;
    Vec2::new(jx, jy)
}

/// Build the world-pass vertex list for one frame
pub fn build_scene(state: &GameState, starfield: &Starfield, settings: &Settings) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(4096);

    if settings.quality.starfield_enabled() {
        starfield.vertices(&mut out);
    }

    let offset = if settings.effective_screen_shake() {
        shake_offset(state)
    } else {
        Vec2::ZERO
    };

    let particle_cap = settings.max_particles();
    let skip = state.particles.len().saturating_sub(particle_cap);
    for particle in state.particles.iter().skip(skip) {
        let base = colors::ENEMY_KIND[particle.kind as usize % colors::ENEMY_KIND.len()];
        let color = [base[0], base[1], base[2], 0.86 * particle.fade()];
        circle(&mut out, particle.pos + offset, particle.radius, color, 12);
    }

    for bullet in &state.bullets {
        glow_quad(
            &mut out,
            bullet.pos + offset,
            Vec2::new(4.0, 18.0),
            colors::NEON_YELLOW,
            2,
        );
    }

    for enemy in &state.enemies {
        let color = colors::ENEMY_KIND[enemy.kind as usize % colors::ENEMY_KIND.len()];
        glow_quad(
            &mut out,
            enemy.pos + offset,
            Vec2::splat(enemy.size()),
            color,
            3,
        );
    }

    for powerup in &state.powerups {
        glow_circle(&mut out, powerup.pos + offset, 10.0, colors::NEON_BLUE, 3);
    }

    glow_quad(
        &mut out,
        state.player.pos + offset,
        Vec2::new(36.0, 22.0),
        colors::NEON_CYAN,
        3,
    );

    out
}
