//! Data-driven game balance
//!
//! Every gameplay constant the simulation consumes, as a serializable struct.
//! Defaults mirror [`crate::consts`]; a JSON tuning file can override any
//! subset of fields. Values are fixed once a game starts.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance values consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Screen width in pixels
    pub screen_width: f32,
    /// Screen height in pixels
    pub screen_height: f32,
    /// Player horizontal speed, px/s
    pub player_speed: f32,
    /// Bullet upward speed, px/s
    pub bullet_speed: f32,
    /// Enemy fall speed, px/s
    pub enemy_fall_speed: f32,
    /// Enemy horizontal drift speed, px/s
    pub enemy_side_speed: f32,
    /// Ticks between automatic enemy spawns
    pub enemy_spawn_delay: u32,
    /// Life pool at game start
    pub starting_lives: u8,
    /// Score per enemy destroyed by a bullet
    pub kill_score: u32,
    /// Starfield population
    pub star_count: usize,
    /// Star fall speed, px/s
    pub star_speed: f32,
    /// Smallest star radius, px
    pub star_radius_min: f32,
    /// Largest star radius, px
    pub star_radius_max: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            player_speed: PLAYER_SPEED,
            bullet_speed: BULLET_SPEED,
            enemy_fall_speed: ENEMY_FALL_SPEED,
            enemy_side_speed: ENEMY_SIDE_SPEED,
            enemy_spawn_delay: ENEMY_SPAWN_DELAY,
            starting_lives: STARTING_LIVES,
            kill_score: KILL_SCORE,
            star_count: STAR_COUNT,
            star_speed: STAR_SPEED,
            star_radius_min: STAR_RADIUS_MIN,
            star_radius_max: STAR_RADIUS_MAX,
        }
    }
}

impl Tuning {
    /// Parse a tuning file; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Tuning = serde_json::from_str(json)?;
        tuning.sanitize();
        Ok(tuning)
    }

    /// Clamp degenerate values into playable ranges
    ///
    /// A bad tuning file must not be able to wedge the simulation: the screen
    /// must fit the player, the spawn timer must advance, and the star radius
    /// bounds must be ordered.
    pub fn sanitize(&mut self) {
        let min_width = PLAYER_HALF.x * 2.0;
        if self.screen_width < min_width {
            log::warn!("screen_width {} too small, clamping", self.screen_width);
            self.screen_width = min_width;
        }
        let min_height = (PLAYER_HALF.y * 2.0) + PLAYER_BOTTOM_MARGIN;
        if self.screen_height < min_height {
            log::warn!("screen_height {} too small, clamping", self.screen_height);
            self.screen_height = min_height;
        }
        if self.enemy_spawn_delay == 0 {
            self.enemy_spawn_delay = 1;
        }
        if self.starting_lives == 0 {
            self.starting_lives = 1;
        }
        self.player_speed = self.player_speed.max(0.0);
        self.bullet_speed = self.bullet_speed.max(0.0);
        self.enemy_fall_speed = self.enemy_fall_speed.max(0.0);
        self.enemy_side_speed = self.enemy_side_speed.max(0.0);
        self.star_speed = self.star_speed.max(0.0);
        self.star_radius_min = self.star_radius_min.max(0.1);
        if self.star_radius_max < self.star_radius_min {
            self.star_radius_max = self.star_radius_min;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{ "enemy_spawn_delay": 30, "kill_score": 25 }"#).unwrap();
        assert_eq!(tuning.enemy_spawn_delay, 30);
        assert_eq!(tuning.kill_score, 25);
        // Untouched fields keep their defaults
        assert_eq!(tuning.screen_width, SCREEN_WIDTH);
        assert_eq!(tuning.starting_lives, STARTING_LIVES);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Tuning::from_json("not json").is_err());
    }

    #[test]
    fn test_sanitize_clamps_degenerate_values() {
        let mut tuning = Tuning {
            screen_width: 1.0,
            enemy_spawn_delay: 0,
            starting_lives: 0,
            star_radius_min: 5.0,
            star_radius_max: 2.0,
            ..Tuning::default()
        };
        tuning.sanitize();
        assert!(tuning.screen_width >= PLAYER_HALF.x * 2.0);
        assert_eq!(tuning.enemy_spawn_delay, 1);
        assert_eq!(tuning.starting_lives, 1);
        assert!(tuning.star_radius_max >= tuning.star_radius_min);
    }
}
