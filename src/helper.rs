//! This module contains helper functions that are used throughout the game.

use glam::Vec2;

/// Clamps a sprite center into the playfield so its visual footprint stays fully inside.
///
/// # Arguments
/// * `point` - The sprite's center position
/// * `half_extent` - Half the sprite's visual footprint on each axis
/// * `bounds` - The playfield dimensions
///
/// # Returns
/// The nearest position whose sprite rectangle lies within `[0, bounds]` on
/// both axes. If the sprite is larger than the playfield on an axis, the
/// inner edge wins rather than panicking.
pub fn clamp_to_bounds(point: Vec2, half_extent: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(
        point.x.max(half_extent.x).min(bounds.x - half_extent.x),
        point.y.max(half_extent.y).min(bounds.y - half_extent.y),
    )
}

/// The avatar's default start position: bottom-center of the playfield, with
/// its sprite resting on the lower edge.
pub fn avatar_start(bounds: Vec2, sprite_size: Vec2) -> Vec2 {
    Vec2::new(bounds.x / 2.0, bounds.y - sprite_size.y / 2.0)
}
