//! Session parameterization.
//!
//! The loop's tuning constants are collapsed into one structure so a host can
//! run differently-flavored sessions (faster guardian, wider detection, no
//! flash) from the same implementation.

use std::time::Duration;

use bevy_ecs::resource::Resource;
use glam::Vec2;

use crate::constants;
use crate::error::{GameError, GameResult};

/// Tuning constants for one session.
///
/// Inserted into the world as a resource at construction and read-only from
/// then on.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Per-tick easing factor for the avatar's pointer follow, in `(0, 1]`.
    pub avatar_ease: f32,
    /// Guardian travel speed in playfield units per tick.
    pub guardian_speed: f32,
    /// Distance from the avatar within which a target becomes selected.
    pub chase_radius: f32,
    /// Distance from the selected target within which the guardian captures it.
    pub catch_radius: f32,
    /// Wall-clock length of the capture flash overlay. Zero disables the flash.
    pub flash_duration: Duration,
    /// Number of targets laid out across the playfield.
    pub target_count: usize,
    /// Visual footprint of the avatar sprite.
    pub avatar_size: Vec2,
    /// Visual footprint of the guardian sprite.
    pub guardian_size: Vec2,
    /// Visual footprint of a target sprite.
    pub target_size: Vec2,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            avatar_ease: constants::AVATAR_EASE,
            guardian_speed: constants::GUARDIAN_SPEED,
            chase_radius: constants::CHASE_RADIUS,
            catch_radius: constants::CATCH_RADIUS,
            flash_duration: constants::FLASH_DURATION,
            target_count: constants::TARGET_COUNT,
            avatar_size: constants::AVATAR_SIZE,
            guardian_size: constants::GUARDIAN_SIZE,
            target_size: constants::TARGET_SIZE,
        }
    }
}

impl SessionConfig {
    /// Validates the configuration, returning an error describing the first
    /// violated constraint.
    pub fn validate(&self) -> GameResult<()> {
        if !(self.avatar_ease > 0.0 && self.avatar_ease <= 1.0) {
            return Err(GameError::InvalidConfig(format!(
                "avatar_ease must be in (0, 1], got {}",
                self.avatar_ease
            )));
        }
        if self.guardian_speed <= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "guardian_speed must be positive, got {}",
                self.guardian_speed
            )));
        }
        if self.chase_radius <= 0.0 || self.catch_radius <= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "radii must be positive, got chase {} / catch {}",
                self.chase_radius, self.catch_radius
            )));
        }
        if self.target_count == 0 {
            return Err(GameError::InvalidConfig("target_count must be at least 1".into()));
        }
        for (name, size) in [
            ("avatar_size", self.avatar_size),
            ("guardian_size", self.guardian_size),
            ("target_size", self.target_size),
        ] {
            if size.x <= 0.0 || size.y <= 0.0 {
                return Err(GameError::InvalidConfig(format!("{name} must be positive, got {size}")));
            }
        }
        Ok(())
    }

    /// The flash overlay length in whole ticks at the nominal loop rate.
    pub fn flash_ticks(&self) -> u32 {
        self.flash_duration.as_secs_f32().div_euclid(constants::LOOP_TIME.as_secs_f32()) as u32
    }

    /// Minimum distance required between the guardian's home and every target.
    pub fn home_separation(&self) -> f32 {
        self.target_size.x * constants::HOME_SEPARATION_FACTOR
    }
}
