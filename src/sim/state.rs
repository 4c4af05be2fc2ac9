//! Game state and core simulation types
//!
//! All state that must be persisted for determinism lives here. Entities are
//! plain data; behavior beyond initial placement belongs to the tick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only a restart intent is accepted
    GameOver,
}

/// One-shot events emitted during a tick, drained by the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bullet left the player's ship
    BulletFired,
    /// An enemy was destroyed by a bullet
    EnemyDestroyed,
    /// An enemy rammed the player
    PlayerHit,
    /// Lives ran out
    GameOver,
}

/// The player's ship
///
/// Never destroyed, only repositioned. Horizontal input velocity is derived
/// from held keys each tick and not stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
}

impl Player {
    /// Spawn at bottom-center of the screen
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                tuning.screen_width / 2.0,
                tuning.screen_height - PLAYER_BOTTOM_MARGIN - PLAYER_HALF.y,
            ),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, PLAYER_HALF)
    }
}

/// A bullet entity, constant upward velocity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
}

impl Bullet {
    /// Spawn centered on the player's top edge
    pub fn new(id: u32, player: &Player) -> Self {
        Self {
            id,
            pos: Vec2::new(player.pos.x, player.aabb().top() + BULLET_HALF.y),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, BULLET_HALF)
    }
}

/// An enemy entity, falls at a constant speed with sideways drift
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    /// Signed horizontal velocity, px/s. Sign flips on wall contact.
    pub side_vel: f32,
}

impl Enemy {
    /// Spawn just above the top edge at a random x, drift sign random
    pub fn spawn(id: u32, rng: &mut Pcg32, tuning: &Tuning) -> Self {
        let lo = ENEMY_HALF.x;
        let hi = tuning.screen_width - ENEMY_HALF.x;
        // Degenerate range (enemy wider than screen): fall back to center
        let x = if lo >= hi {
            tuning.screen_width / 2.0
        } else {
            rng.random_range(lo..=hi)
        };
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            id,
            pos: Vec2::new(x, -(ENEMY_HALF.y * 2.0)),
            side_vel: sign * tuning.enemy_side_speed,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, ENEMY_HALF)
    }
}

/// A decorative starfield particle
///
/// Recycled to the top when it leaves the screen, never destroyed. Stars are
/// purely visual and never touch score, lives or collisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
}

impl Star {
    /// Scatter anywhere on screen (initial starfield fill)
    pub fn scatter(rng: &mut Pcg32, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..=tuning.screen_width),
                rng.random_range(0.0..=tuning.screen_height),
            ),
            radius: rng.random_range(tuning.star_radius_min..=tuning.star_radius_max),
        }
    }

    /// Reposition to the top edge with a fresh random x and radius
    pub fn recycle(&mut self, rng: &mut Pcg32, tuning: &Tuning) {
        self.pos = Vec2::new(rng.random_range(0.0..=tuning.screen_width), 0.0);
        self.radius = rng.random_range(tuning.star_radius_min..=tuning.star_radius_max);
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Owned RNG; all randomness flows through here
    pub rng: Pcg32,
    /// Balance values fixed at game start
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Score, +`kill_score` per enemy destroyed by a bullet
    pub score: u32,
    /// Remaining lives, clamped at 0
    pub lives: u8,
    /// Countdown to the next automatic enemy spawn
    pub spawn_timer: u32,
    /// Player ship
    pub player: Player,
    /// Live bullets (sorted by id for determinism)
    pub bullets: Vec<Bullet>,
    /// Live enemies (sorted by id for determinism)
    pub enemies: Vec<Enemy>,
    /// Decorative starfield (fixed population, recycled)
    pub stars: Vec<Star>,
    /// Events emitted by the most recent tick (not gameplay state)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game with the given tuning
    pub fn with_tuning(seed: u64, mut tuning: Tuning) -> Self {
        tuning.sanitize();
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..tuning.star_count)
            .map(|_| Star::scatter(&mut rng, &tuning))
            .collect();
        let state = Self {
            seed,
            rng,
            player: Player::new(&tuning),
            time_ticks: 0,
            phase: GamePhase::Playing,
            score: 0,
            lives: tuning.starting_lives,
            spawn_timer: tuning.enemy_spawn_delay,
            bullets: Vec::new(),
            enemies: Vec::new(),
            stars,
            events: Vec::new(),
            next_id: 1,
            tuning,
        };
        log::info!("New game, seed {}", state.seed);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fire a bullet from the player's top edge
    pub fn spawn_bullet(&mut self) {
        let id = self.next_entity_id();
        self.bullets.push(Bullet::new(id, &self.player));
    }

    /// Spawn one enemy via the random-spawn constructor
    pub fn spawn_enemy(&mut self) {
        let id = self.next_entity_id();
        let enemy = Enemy::spawn(id, &mut self.rng, &self.tuning);
        log::debug!("Enemy {} spawned at x={:.1}", enemy.id, enemy.pos.x);
        self.enemies.push(enemy);
    }

    /// Regenerate the starfield from the owned RNG
    pub fn regenerate_stars(&mut self) {
        self.stars.clear();
        for _ in 0..self.tuning.star_count {
            let star = Star::scatter(&mut self.rng, &self.tuning);
            self.stars.push(star);
        }
    }

    /// Full reset back to the initial Playing state
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.phase = GamePhase::Playing;
        self.spawn_timer = self.tuning.enemy_spawn_delay;
        self.bullets.clear();
        self.enemies.clear();
        self.player = Player::new(&self.tuning);
        self.regenerate_stars();
        log::info!("Game reset");
    }

    /// Hand the current tick's events to the audio collaborator
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
