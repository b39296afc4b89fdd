//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::Vec2;

/// Duration of a single loop iteration at the nominal 60 Hz tick rate.
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Per-tick easing factor applied to the avatar's pointer follow.
pub const AVATAR_EASE: f32 = 0.2;
/// Guardian travel speed, in playfield units per tick.
pub const GUARDIAN_SPEED: f32 = 30.0;
/// Radius around the avatar within which a target becomes selected.
pub const CHASE_RADIUS: f32 = 200.0;
/// Radius around a selected target within which the guardian captures it.
pub const CATCH_RADIUS: f32 = 80.0;
/// How long the full-screen flash overlay stays up after a capture.
pub const FLASH_DURATION: Duration = Duration::from_millis(200);
/// Number of targets laid out across the playfield.
pub const TARGET_COUNT: usize = 5;

/// Visual footprint of the avatar sprite, in playfield units.
pub const AVATAR_SIZE: Vec2 = Vec2::new(90.0, 60.0);
/// Visual footprint of the guardian sprite.
pub const GUARDIAN_SIZE: Vec2 = Vec2::new(225.0, 150.0);
/// Visual footprint of a target sprite.
pub const TARGET_SIZE: Vec2 = Vec2::new(75.0, 50.0);

/// The guardian's home must start at least this many target-widths away from every target.
pub const HOME_SEPARATION_FACTOR: f32 = 2.0;
/// Bounded rejection sampling for home placement; exceeding this is a construction error.
pub const HOME_PLACEMENT_ATTEMPTS: usize = 1000;

/// Vertical gap between the guardian sprite and the alert prompt anchored above it.
pub const PROMPT_MARGIN: f32 = 20.0;

/// Label shown in the start overlay before the first click.
pub const START_PROMPT_LABEL: &str = "Click to Start";
/// Label on the prompt anchored above the guardian while the alert is active.
pub const ALERT_PROMPT_LABEL: &str = "Help!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_easing_factor_in_range() {
        assert!(AVATAR_EASE > 0.0 && AVATAR_EASE <= 1.0);
    }

    #[test]
    fn test_catch_inside_chase() {
        // A capture happens while the target is still selected, so the catch
        // radius must not exceed the chase radius.
        assert!(CATCH_RADIUS <= CHASE_RADIUS);
    }

    #[test]
    fn test_flash_spans_whole_ticks() {
        assert!(FLASH_DURATION >= LOOP_TIME);
    }
}
