use bevy_ecs::{
    event::{EventReader, EventWriter},
    query::{With, Without},
    system::{Query, Res, ResMut},
};
use strum::IntoEnumIterator;

use crate::{
    audio::Cue,
    events::SessionEvent,
    helper::avatar_start,
    systems::{
        audio::AudioEvent,
        components::{AlertState, Avatar, Guardian, Home, Playfield, Position, SelectedTarget, SessionStage, SpriteSize},
    },
};

/// Drains the inbound host event queue once per tick.
///
/// Clicks start the session while it is waiting, and otherwise poke the
/// guardian (replaying the alert sting) when they land inside its bounding
/// box. A visibility loss resets the whole session so it never resumes
/// mid-chase in a stale state.
#[allow(clippy::too_many_arguments)]
pub fn control_system(
    mut events: EventReader<SessionEvent>,
    playfield: Res<Playfield>,
    home: Res<Home>,
    mut stage: ResMut<SessionStage>,
    mut alert: ResMut<AlertState>,
    mut selected: ResMut<SelectedTarget>,
    mut audio: EventWriter<AudioEvent>,
    mut avatars: Query<(&mut Position, &SpriteSize), (With<Avatar>, Without<Guardian>)>,
    mut guardians: Query<(&mut Position, &SpriteSize), (With<Guardian>, Without<Avatar>)>,
) {
    for event in events.read() {
        match *event {
            SessionEvent::Click(point) => {
                // Out-of-bounds clicks are valid input; clamp instead of rejecting.
                let point = point.clamp(glam::Vec2::ZERO, playfield.0);

                if matches!(*stage, SessionStage::NotStarted) {
                    tracing::info!("Session started");
                    *stage = SessionStage::Running;
                    audio.write(AudioEvent::StartLoop(Cue::Ambient));
                    continue;
                }

                if let Ok((position, size)) = guardians.single() {
                    let inside = (point - position.0).abs().cmple(size.half()).all();
                    if inside {
                        tracing::trace!(?point, "Guardian clicked");
                        audio.write(AudioEvent::Play(Cue::Alert));
                    }
                }
            }
            SessionEvent::VisibilityChanged(visible) => {
                if !visible {
                    tracing::info!("Playfield scrolled out of view, resetting session");

                    *stage = SessionStage::NotStarted;
                    *alert = AlertState::Calm;
                    selected.0 = None;

                    if let Ok((mut position, size)) = avatars.single_mut() {
                        position.0 = avatar_start(playfield.0, size.0);
                    }
                    if let Ok((mut position, _)) = guardians.single_mut() {
                        position.0 = home.0;
                    }

                    for cue in Cue::iter() {
                        audio.write(AudioEvent::Stop(cue));
                    }
                }
            }
        }
    }
}
