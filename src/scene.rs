//! The per-tick render description handed to the host.
//!
//! The core owns no pixels; it rebuilds a [`Scene`] every tick and the host
//! draws it with whatever assets and surface it has.

use bevy_ecs::resource::Resource;
use glam::Vec2;

/// Which sprite the host should draw at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Target,
    Avatar,
    Guardian,
}

/// One sprite placement. Positions are sprite centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSprite {
    pub kind: SpriteKind,
    pub position: Vec2,
    pub size: Vec2,
}

/// A full-playfield overlay that replaces normal entity rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Dimmed playfield with a start label, shown until the first click.
    StartPrompt,
    /// Brief full-screen flash shown when a capture fires.
    Flash,
}

/// The labeled prompt anchored above the guardian while the alert is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertPrompt {
    pub position: Vec2,
    pub label: &'static str,
}

/// Everything the host needs to draw one frame.
///
/// Sprites are listed back-to-front; when `overlay` is set it replaces the
/// sprite list entirely.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub sprites: Vec<SceneSprite>,
    pub overlay: Option<Overlay>,
    pub alert_prompt: Option<AlertPrompt>,
}
