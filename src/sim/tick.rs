//! Fixed timestep simulation tick
//!
//! One call advances the whole game by a single step, in a fixed order:
//! input routing, movement (player, bullets, enemies, stars), spawner,
//! collisions, terminal-state check, then one compaction pass per collection.
//! Entities hit or off-screen are marked dead during the pass and removed only
//! at the end, so nothing is ever collision-tested after its removal.

use super::aabb::Aabb;
use super::collision::{player_contact, resolve_bullet_hits};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{ENEMY_HALF, PLAYER_HALF};

/// Input commands for a single tick (deterministic)
///
/// `left`/`right` are sampled key-held state; `fire` and `restart` are press
/// edges, meaningful at most once per press. The driver clears edge flags
/// after each processed tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
    /// Fire was pressed this tick (one bullet per press, not per tick held)
    pub fire: bool,
    /// Restart was pressed this tick (honored only in GameOver)
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    // GameOver freezes everything except the restart intent
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.reset();
        }
        return;
    }

    state.time_ticks += 1;

    if input.fire {
        state.spawn_bullet();
        state.events.push(GameEvent::BulletFired);
    }

    move_player(state, input, dt);
    let mut bullet_dead = move_bullets(state, dt);
    let (mut enemy_dead, breaches) = move_enemies(state, dt);
    move_stars(state, dt);

    // Each enemy that crossed the bottom edge costs exactly one life
    if breaches > 0 {
        state.lives = state.lives.saturating_sub(breaches);
        if state.lives == 0 {
            enter_game_over(state);
            compact(&mut state.bullets, &bullet_dead);
            compact(&mut state.enemies, &enemy_dead);
            return;
        }
    }

    // Spawner: countdown, one enemy per expiry
    if state.spawn_timer > 0 {
        state.spawn_timer -= 1;
    }
    if state.spawn_timer == 0 {
        state.spawn_enemy();
        enemy_dead.push(false);
        state.spawn_timer = state.tuning.enemy_spawn_delay;
    }

    // Bullet vs enemy, 1:1 pairing, score once per pair
    let kills = resolve_bullet_hits(
        &state.bullets,
        &state.enemies,
        &mut bullet_dead,
        &mut enemy_dead,
    );
    if kills > 0 {
        state.score += kills * state.tuning.kill_score;
        for _ in 0..kills {
            state.events.push(GameEvent::EnemyDestroyed);
        }
    }

    // Player vs enemy: at most one life lost per tick from this path
    if player_contact(&state.player, &state.enemies, &mut enemy_dead) {
        state.events.push(GameEvent::PlayerHit);
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            enter_game_over(state);
        }
    }

    compact(&mut state.bullets, &bullet_dead);
    compact(&mut state.enemies, &enemy_dead);
}

/// Apply held-key movement, then clamp the player box to the screen
fn move_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let mut dx = 0.0;
    if input.left {
        dx -= state.tuning.player_speed;
    }
    if input.right {
        dx += state.tuning.player_speed;
    }
    state.player.pos.x = Aabb::clamp_center_x(
        state.player.pos.x + dx * dt,
        PLAYER_HALF.x,
        0.0,
        state.tuning.screen_width,
    );
}

/// Advance bullets upward, marking those fully above the screen
fn move_bullets(state: &mut GameState, dt: f32) -> Vec<bool> {
    let mut dead = Vec::with_capacity(state.bullets.len());
    for bullet in &mut state.bullets {
        bullet.pos.y -= state.tuning.bullet_speed * dt;
        dead.push(bullet.aabb().bottom() < 0.0);
    }
    dead
}

/// Advance enemies (fall plus drift with wall bounce), marking bottom-crossers
///
/// Returns the dead marks and the number of breaches; the caller turns each
/// breach into a life loss.
fn move_enemies(state: &mut GameState, dt: f32) -> (Vec<bool>, u8) {
    let width = state.tuning.screen_width;
    let height = state.tuning.screen_height;
    let mut dead = Vec::with_capacity(state.enemies.len());
    let mut breaches = 0u8;

    for enemy in &mut state.enemies {
        enemy.pos.y += state.tuning.enemy_fall_speed * dt;
        enemy.pos.x += enemy.side_vel * dt;

        // Wall bounce: flip drift sign and push back inside
        let ebox = enemy.aabb();
        if ebox.left() < 0.0 {
            enemy.side_vel = enemy.side_vel.abs();
            enemy.pos.x = ENEMY_HALF.x;
        } else if ebox.right() > width {
            enemy.side_vel = -enemy.side_vel.abs();
            enemy.pos.x = width - ENEMY_HALF.x;
        }

        let breached = enemy.aabb().top() > height;
        if breached {
            breaches = breaches.saturating_add(1);
            log::debug!("Enemy {} breached the bottom edge", enemy.id);
        }
        dead.push(breached);
    }
    (dead, breaches)
}

/// Advance the starfield; stars past the bottom are recycled, not destroyed,
/// and never touch the game-state counters
fn move_stars(state: &mut GameState, dt: f32) {
    let tuning = &state.tuning;
    for star in &mut state.stars {
        star.pos.y += tuning.star_speed * dt;
        if star.pos.y - star.radius > tuning.screen_height {
            star.recycle(&mut state.rng, tuning);
        }
    }
}

fn enter_game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::GameOver);
    log::info!(
        "Game over at tick {}, final score {}",
        state.time_ticks,
        state.score
    );
}

/// Rebuild a collection from its keep marks in one pass
fn compact<T>(entities: &mut Vec<T>, dead: &[bool]) {
    debug_assert_eq!(entities.len(), dead.len());
    let mut index = 0;
    entities.retain(|_| {
        let keep = !dead[index];
        index += 1;
        keep
    });
}
