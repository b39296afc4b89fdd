use bevy_ecs::{
    query::With,
    system::{Query, Res, ResMut},
};

use crate::{
    config::SessionConfig,
    systems::components::{Avatar, Position, SelectedTarget, SessionStage, TargetLayout},
};

/// Recomputes the selected target from the avatar's position.
///
/// Targets are scanned in layout order and the FIRST one within the chase
/// radius wins, even when a later target is nearer. Gameplay tuning depends
/// on that left-to-right bias; do not swap in a nearest-match.
pub fn target_selection_system(
    stage: Res<SessionStage>,
    config: Res<SessionConfig>,
    targets: Res<TargetLayout>,
    mut selected: ResMut<SelectedTarget>,
    avatars: Query<&Position, With<Avatar>>,
) {
    if !stage.is_running() {
        return;
    }

    let Ok(avatar) = avatars.single() else {
        return;
    };

    let next = targets
        .0
        .iter()
        .position(|target| avatar.0.distance(*target) < config.chase_radius);

    if next != selected.0 {
        tracing::trace!(from = ?selected.0, to = ?next, "Selected target changed");
    }
    selected.0 = next;
}
