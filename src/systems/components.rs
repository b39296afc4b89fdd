use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;
use smallvec::SmallVec;

/// A tag component for the pointer-following entity.
#[derive(Default, Component)]
pub struct Avatar;

/// A tag component for the intercepting entity.
#[derive(Default, Component)]
pub struct Guardian;

/// An entity's center position on the playfield.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// An entity's visual footprint; half-extents bound its movement.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SpriteSize(pub Vec2);

impl SpriteSize {
    /// Half the footprint on each axis.
    pub fn half(&self) -> Vec2 {
        self.0 * 0.5
    }
}

#[derive(Bundle)]
pub struct AvatarBundle {
    pub avatar: Avatar,
    pub position: Position,
    pub size: SpriteSize,
}

#[derive(Bundle)]
pub struct GuardianBundle {
    pub guardian: Guardian,
    pub position: Position,
    pub size: SpriteSize,
}

/// Current playfield dimensions, updated by the host on resize.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Playfield(pub Vec2);

/// The pointer position sampled at the top of the current tick.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PointerState(pub Vec2);

/// The fixed, ordered target positions for this session.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TargetLayout(pub SmallVec<[Vec2; 5]>);

/// The guardian's idle position, fixed for the session.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Home(pub Vec2);

/// Index of the target the avatar is currently near, recomputed every tick.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectedTarget(pub Option<usize>);

/// A resource to track the overall stage of the session from a high-level perspective.
#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy)]
pub enum SessionStage {
    /// Waiting for the start click; entities hold their initial positions.
    NotStarted,
    /// The main interaction loop is active.
    Running,
    /// Short full-screen flash after a capture; entity updates are suspended.
    Flashing { remaining_ticks: u32 },
}

impl SessionStage {
    /// Returns true when entity systems should advance this tick.
    pub fn is_running(&self) -> bool {
        matches!(self, SessionStage::Running)
    }
}

/// The feedback state machine driven by the capture predicate.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertState {
    #[default]
    Calm,
    Alert,
}
