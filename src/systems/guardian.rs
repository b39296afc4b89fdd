use bevy_ecs::{
    query::With,
    system::{Query, Res},
};

use crate::{
    config::SessionConfig,
    helper::clamp_to_bounds,
    systems::components::{
        AlertState, Guardian, Home, Playfield, Position, SelectedTarget, SessionStage, SpriteSize, TargetLayout,
    },
};

/// Moves the guardian one fixed-speed step toward its destination.
///
/// The destination is the selected target, or home when nothing is selected.
/// Within one step of the destination the guardian snaps onto it exactly; a
/// constant-speed step past it every tick would oscillate, and the snap also
/// covers the zero-length direction vector without dividing by it.
///
/// Movement is skipped while the alert is active, holding the guardian at its
/// point of capture until the alert resolves.
pub fn guardian_movement_system(
    stage: Res<SessionStage>,
    config: Res<SessionConfig>,
    alert: Res<AlertState>,
    selected: Res<SelectedTarget>,
    targets: Res<TargetLayout>,
    home: Res<Home>,
    playfield: Res<Playfield>,
    mut guardians: Query<(&mut Position, &SpriteSize), With<Guardian>>,
) {
    if !stage.is_running() {
        return;
    }

    let Ok((mut position, size)) = guardians.single_mut() else {
        return;
    };

    if matches!(*alert, AlertState::Calm) {
        let destination = selected
            .0
            .and_then(|index| targets.0.get(index).copied())
            .unwrap_or(home.0);

        let delta = destination - position.0;
        let distance = delta.length();

        position.0 = if distance > config.guardian_speed {
            position.0 + delta / distance * config.guardian_speed
        } else {
            destination
        };
    }

    position.0 = clamp_to_bounds(position.0, size.half(), playfield.0);
}
