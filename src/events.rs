use bevy_ecs::prelude::*;
use glam::Vec2;

/// Inbound host signals, queued between frames and drained once per tick.
///
/// Coordinates are relative to the playfield origin; out-of-bounds points are
/// clamped rather than rejected.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub enum SessionEvent {
    /// A click or tap at the given playfield coordinates.
    Click(Vec2),
    /// The playfield scrolled into (`true`) or out of (`false`) view.
    /// Scrolling out of view resets the session.
    VisibilityChanged(bool),
}
