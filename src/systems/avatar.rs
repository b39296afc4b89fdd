use bevy_ecs::{
    query::With,
    system::{Query, Res},
};

use crate::{
    config::SessionConfig,
    helper::clamp_to_bounds,
    systems::components::{Avatar, Playfield, PointerState, Position, SessionStage, SpriteSize},
};

/// Eases the avatar toward the sampled pointer position.
///
/// One interpolation step per tick, not an instantaneous snap, which gives the
/// trailing follow feel. The pointer may be anywhere (including outside the
/// playfield); the avatar clamps at the boundary.
pub fn avatar_follow_system(
    stage: Res<SessionStage>,
    config: Res<SessionConfig>,
    pointer: Res<PointerState>,
    playfield: Res<Playfield>,
    mut avatars: Query<(&mut Position, &SpriteSize), With<Avatar>>,
) {
    if !stage.is_running() {
        return;
    }

    for (mut position, size) in avatars.iter_mut() {
        let eased = position.0.lerp(pointer.0, config.avatar_ease);
        position.0 = clamp_to_bounds(eased, size.half(), playfield.0);
    }
}
