use bevy_ecs::{
    event::EventWriter,
    query::With,
    system::{Query, Res, ResMut},
};

use crate::{
    audio::Cue,
    config::SessionConfig,
    systems::{
        audio::AudioEvent,
        components::{AlertState, Guardian, Position, SelectedTarget, SessionStage, TargetLayout},
    },
};

/// Evaluates the capture predicate and drives the Calm/Alert state machine.
///
/// Captured means: a target is selected AND the guardian stands within the
/// catch radius of it. Transitions fire only on edges of that predicate, so
/// each side-effect batch runs exactly once per capture and once per release;
/// repeated ticks with an unchanged predicate are no-ops.
pub fn alert_system(
    config: Res<SessionConfig>,
    selected: Res<SelectedTarget>,
    targets: Res<TargetLayout>,
    mut stage: ResMut<SessionStage>,
    mut alert: ResMut<AlertState>,
    mut audio: EventWriter<AudioEvent>,
    guardians: Query<&Position, With<Guardian>>,
) {
    if !stage.is_running() {
        return;
    }

    let Ok(guardian) = guardians.single() else {
        return;
    };

    let captured = selected
        .0
        .and_then(|index| targets.0.get(index))
        .map(|target| guardian.0.distance(*target) < config.catch_radius)
        .unwrap_or(false);

    match (*alert, captured) {
        (AlertState::Calm, true) => {
            tracing::debug!(target_index = ?selected.0, "Capture detected, entering alert");

            // Cue order matters for layering: duck the ambience before the
            // sting and tension loop come in.
            audio.write(AudioEvent::Pause(Cue::Ambient));
            audio.write(AudioEvent::Play(Cue::Alert));
            audio.write(AudioEvent::StartLoop(Cue::Tension));

            *alert = AlertState::Alert;

            let remaining_ticks = config.flash_ticks();
            if remaining_ticks > 0 {
                *stage = SessionStage::Flashing { remaining_ticks };
            }
        }
        (AlertState::Alert, false) => {
            tracing::debug!("Capture released, returning to calm");

            audio.write(AudioEvent::Stop(Cue::Alert));
            audio.write(AudioEvent::Stop(Cue::Tension));
            audio.write(AudioEvent::StartLoop(Cue::Ambient));

            *alert = AlertState::Calm;
        }
        _ => {}
    }
}
