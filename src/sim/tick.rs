//! Fixed timestep simulation tick
//!
//! Core update loop that advances the session deterministically.

use glam::Vec2;
use rand::Rng;

use super::state::{Bullet, Enemy, GameEvent, GamePhase, GameState, PowerUp, ENEMY_KINDS};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal movement intent, -1 (left) to 1 (right)
    pub move_x: f32,
    /// Fire button held
    pub fire: bool,
    /// Restart after game over
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Title => {
            // Attract screen: the swarm holds still until the first shot
            if input.fire {
                state.phase = GamePhase::Playing;
                log::info!("session started (seed {})", state.seed);
            }
            return;
        }
        GamePhase::GameOver => {
            if input.restart {
                reset_session(state);
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;
    let t = state.time_secs();

    state.shake = (state.shake - SHAKE_DECAY * dt).max(0.0);

    state.player.update(input.move_x, dt);
    if input.fire {
        fire(state);
    }

    for bullet in &mut state.bullets {
        bullet.update(dt);
    }
    state.bullets.retain(|b| b.alive);

    // Wobble, then the constant downward drift that eventually ends the run
    let mut invaded = false;
    for enemy in &mut state.enemies {
        enemy.update(dt, t);
        enemy.base_y += ENEMY_DRIFT * dt;
        if enemy.base_y >= INVASION_LINE {
            invaded = true;
        }
    }

    collide_bullets(state);

    let player_box = state.player.hitbox();
    let mut collected = 0u32;
    for powerup in &mut state.powerups {
        powerup.update(dt);
        if powerup.alive && powerup.hitbox().intersects(&player_box) {
            powerup.alive = false;
            collected += 1;
        }
    }
    state.powerups.retain(|p| p.alive);
    for _ in 0..collected {
        state.player.multishot = (state.player.multishot + 1).min(MULTISHOT_MAX);
        state.push_event(GameEvent::PowerUp);
    }

    for particle in &mut state.particles {
        particle.update(dt);
    }
    state.particles.retain(|p| !p.expired());

    if state.enemies.is_empty() {
        state.wave += 1;
        spawn_wave(state);
    }

    if invaded {
        state.phase = GamePhase::GameOver;
        log::info!(
            "session over at wave {} with score {}",
            state.wave,
            state.score
        );
    }
}

/// Spawn `multishot` bullets spread symmetrically around the ship
fn fire(state: &mut GameState) {
    if state.player.cooldown > 0.0 {
        return;
    }
    let multi = state.player.multishot;
    for i in 0..multi {
        let offset = (i as f32 - (multi as f32 - 1.0) / 2.0) * MULTISHOT_SPREAD;
        let pos = state.player.pos + Vec2::new(offset, -20.0);
        state.bullets.push(Bullet::new(pos));
    }
    state.player.cooldown = if multi == 1 {
        FIRE_COOLDOWN
    } else {
        FIRE_COOLDOWN_MULTI
    };
    state.push_event(GameEvent::Laser);
}

/// Pairwise bullet x enemy overlap pass
///
/// Every overlapping pair scores; a spent bullet keeps its rectangle for the
/// rest of the frame, so one shot can clip two adjacent enemies.
fn collide_bullets(state: &mut GameState) {
    // Spawns are deferred so the scan never mutates the collections it walks
    let mut bursts: Vec<(Vec2, u8)> = Vec::new();
    let mut drops: Vec<Vec2> = Vec::new();

    for bi in 0..state.bullets.len() {
        let bullet_box = state.bullets[bi].hitbox();
        for ei in 0..state.enemies.len() {
            if !state.enemies[ei].alive {
                continue;
            }
            if bullet_box.intersects(&state.enemies[ei].hitbox()) {
                state.bullets[bi].alive = false;
                state.enemies[ei].alive = false;
                state.score += KILL_SCORE;
                state.shake = SHAKE_KICK;
                bursts.push((state.enemies[ei].pos, state.enemies[ei].kind));
                let roll: f32 = state.rng.random();
                if roll < POWERUP_DROP_CHANCE {
                    drops.push(state.enemies[ei].pos);
                }
                state.push_event(GameEvent::Hit);
                state.push_event(GameEvent::Explosion);
            }
        }
    }

    for (pos, kind) in bursts {
        state.spawn_particle_burst(pos, kind);
    }
    for pos in drops {
        state.powerups.push(PowerUp::new(pos));
    }
    state.bullets.retain(|b| b.alive);
    state.enemies.retain(|e| e.alive);
}

/// Populate the swarm grid for the current wave
///
/// Rows grow with the wave number up to a cap; kinds cycle per row.
pub fn spawn_wave(state: &mut GameState) {
    let rows = 4 + state.wave.min(3);
    let spacing_x = (WIDTH / (ENEMY_COLS + 1) as f32).floor();
    for r in 0..rows {
        for c in 0..ENEMY_COLS {
            let x = spacing_x * (c + 1) as f32;
            let y = ENEMY_TOP_OFFSET + r as f32 * ENEMY_ROW_SPACING;
            let kind = (r % ENEMY_KINDS as u32) as u8;
            let phase = state.rng.random::<f32>() * 100.0;
            state.enemies.push(Enemy::new(Vec2::new(x, y), kind, phase));
        }
    }
    log::info!("wave {}: {} enemies", state.wave, state.enemies.len());
}

/// Reset every session scalar and restart at wave 1
fn reset_session(state: &mut GameState) {
    *state = GameState::new(state.seed);
    state.phase = GamePhase::Playing;
    spawn_wave(state);
    log::info!("session restarted");
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A fresh state already in the playing phase, no swarm spawned
    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.phase = GamePhase::Playing;
        state
    }

    fn expected_wave_size(wave: u32) -> usize {
        (ENEMY_COLS * (4 + wave.min(3))) as usize
    }

    #[test]
    fn test_title_waits_for_fire() {
        let mut state = GameState::new(7);
        spawn_wave(&mut state);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.time_ticks, 0);

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        // The transition tick itself runs no simulation
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut state = playing_state(7);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };

        tick(&mut state, &fire, SIM_DT);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.events, vec![GameEvent::Laser]);

        // Cooldown is still running, so holding fire adds nothing
        state.take_events();
        tick(&mut state, &fire, SIM_DT);
        assert_eq!(state.bullets.len(), 1);
        assert!(state.events.is_empty());

        // After the cooldown elapses the next shot goes out
        state.player.cooldown = 0.0;
        tick(&mut state, &fire, SIM_DT);
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn test_multishot_spread_is_symmetric() {
        let mut state = playing_state(7);
        state.player.multishot = 3;
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, SIM_DT);

        assert_eq!(state.bullets.len(), 3);
        let center = state.player.pos.x;
        let offsets: Vec<f32> = state.bullets.iter().map(|b| b.pos.x - center).collect();
        assert!((offsets[0] + MULTISHOT_SPREAD).abs() < 1e-4);
        assert!(offsets[1].abs() < 1e-4);
        assert!((offsets[2] - MULTISHOT_SPREAD).abs() < 1e-4);
        // Multishot also slows the fire rate
        assert!((state.player.cooldown - FIRE_COOLDOWN_MULTI).abs() < 1e-4);
    }

    #[test]
    fn test_bullet_kill_scores_and_bursts() {
        let mut state = playing_state(7);
        state.enemies.push(Enemy::new(Vec2::new(400.0, 290.0), 2, 0.0));
        state.bullets.push(Bullet::new(Vec2::new(400.0, 300.0)));

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.score, KILL_SCORE);
        assert!(state.bullets.is_empty());
        assert_eq!(state.particles.len(), (PARTICLE_BUDGET / 6) as usize);
        assert!(state.events.contains(&GameEvent::Hit));
        assert!(state.events.contains(&GameEvent::Explosion));
        assert_eq!(state.shake, SHAKE_KICK);
        // Clearing the lone enemy advanced the wave and respawned the swarm
        assert_eq!(state.wave, 2);
        assert_eq!(state.enemies.len(), expected_wave_size(2));
    }

    #[test]
    fn test_bullets_leave_screen() {
        let mut state = playing_state(7);
        state.bullets.push(Bullet::new(Vec2::new(100.0, -39.0)));
        // Keep an enemy around so the wave counter stays put
        state.enemies.push(Enemy::new(Vec2::new(800.0, 100.0), 0, 0.0));

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_wave_size_formula() {
        for wave in 1..=6 {
            let mut state = playing_state(wave as u64);
            state.wave = wave;
            spawn_wave(&mut state);
            assert_eq!(
                state.enemies.len(),
                expected_wave_size(wave),
                "wave {wave}"
            );
        }
    }

    #[test]
    fn test_powerup_pickup_caps_multishot() {
        let mut state = playing_state(7);
        state.enemies.push(Enemy::new(Vec2::new(800.0, 100.0), 0, 0.0));
        state.player.multishot = 4;

        state.powerups.push(PowerUp::new(state.player.pos));
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.player.multishot, 5);
        assert!(state.powerups.is_empty());
        assert!(state.events.contains(&GameEvent::PowerUp));

        // Already at the cap: further pickups are consumed but change nothing
        state.powerups.push(PowerUp::new(state.player.pos));
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.player.multishot, 5);
    }

    #[test]
    fn test_powerups_fall_off_screen() {
        let mut state = playing_state(7);
        state.enemies.push(Enemy::new(Vec2::new(800.0, 100.0), 0, 0.0));
        state.powerups.push(PowerUp::new(Vec2::new(100.0, HEIGHT + 19.5)));

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.powerups.is_empty());
        assert_eq!(state.player.multishot, 1);
    }

    #[test]
    fn test_invasion_freezes_until_restart() {
        let mut state = playing_state(7);
        state.score = 120;
        state.player.multishot = 3;
        let mut invader = Enemy::new(Vec2::new(480.0, INVASION_LINE), 1, 0.0);
        invader.base_y = INVASION_LINE + 1.0;
        state.enemies.push(invader);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Frozen: further ticks change nothing
        let ticks_at_over = state.time_ticks;
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, SIM_DT);
        assert_eq!(state.time_ticks, ticks_at_over);
        assert_eq!(state.score, 120);

        // Restart resets every session scalar and respawns wave 1
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.wave, 1);
        assert_eq!(state.player.multishot, 1);
        assert_eq!(state.enemies.len(), expected_wave_size(1));
    }

    #[test]
    fn test_collections_hold_only_live_entities() {
        let mut state = playing_state(42);
        spawn_wave(&mut state);
        let input = TickInput {
            move_x: 0.4,
            fire: true,
            ..Default::default()
        };
        for _ in 0..600 {
            tick(&mut state, &input, SIM_DT);
            assert!(state.bullets.iter().all(|b| b.alive));
            assert!(state.enemies.iter().all(|e| e.alive));
            assert!(state.powerups.iter().all(|p| p.alive));
            assert!(state.particles.iter().all(|p| !p.expired()));
            if state.phase != GamePhase::Playing {
                break;
            }
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = playing_state(99999);
        let mut b = playing_state(99999);
        spawn_wave(&mut a);
        spawn_wave(&mut b);

        let inputs = [
            TickInput {
                move_x: -1.0,
                fire: true,
                ..Default::default()
            },
            TickInput {
                move_x: 1.0,
                ..Default::default()
            },
            TickInput {
                fire: true,
                ..Default::default()
            },
            TickInput::default(),
        ];
        for i in 0..240 {
            let input = &inputs[i % inputs.len()];
            tick(&mut a, input, SIM_DT);
            tick(&mut b, input, SIM_DT);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.bullets.len(), b.bullets.len());
        assert_eq!(a.enemies.len(), b.enemies.len());
        assert_eq!(a.player.pos, b.player.pos);
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.base_y, eb.base_y);
        }
    }
}

#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Firing always spawns exactly `multishot` bullets whose offsets
        /// sum to zero around the ship
        #[test]
        fn fire_spread_is_balanced(multi in 1u8..=MULTISHOT_MAX) {
            let mut state = GameState::new(1);
            state.phase = GamePhase::Playing;
            state.player.multishot = multi;
            let fire = TickInput { fire: true, ..Default::default() };
            tick(&mut state, &fire, SIM_DT);

            prop_assert_eq!(state.bullets.len(), multi as usize);
            let center = state.player.pos.x;
            let sum: f32 = state.bullets.iter().map(|b| b.pos.x - center).sum();
            prop_assert!(sum.abs() < 1e-3);
        }

        /// Multishot never decreases within a session and never passes the cap
        #[test]
        fn multishot_is_monotone(drops in proptest::collection::vec(any::<bool>(), 1..32)) {
            let mut state = GameState::new(5);
            state.phase = GamePhase::Playing;
            state.enemies.push(Enemy::new(glam::Vec2::new(800.0, 100.0), 0, 0.0));

            let mut last = state.player.multishot;
            for drop in drops {
                if drop {
                    state.powerups.push(PowerUp::new(state.player.pos));
                }
                tick(&mut state, &TickInput::default(), SIM_DT);
                prop_assert!(state.player.multishot >= last);
                prop_assert!(state.player.multishot <= MULTISHOT_MAX);
                last = state.player.multishot;
            }
        }
    }
}
