//! Audio dispatch for the interaction loop.
//!
//! Systems never call the host sink directly; they queue [`AudioEvent`]s and
//! this module forwards them, keeping playback fire-and-forget and letting
//! tests observe cue traffic without an audio device.

use bevy_ecs::{
    event::{Event, EventReader},
    system::NonSendMut,
};
use tracing::trace;

use crate::audio::{AudioSink, Cue};

/// Playback requests queued by the gameplay systems.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// Play a one-shot cue; overlapping triggers are allowed to restart or stack.
    Play(Cue),
    /// Begin looping a cue.
    StartLoop(Cue),
    /// Pause a cue, to be resumed by a later loop start.
    Pause(Cue),
    /// Stop a cue entirely.
    Stop(Cue),
}

/// Non-send resource wrapper for the host's audio sink.
///
/// The sink may hold non-`Send` playback handles, so it is exposed to the ECS
/// as a non-send resource rather than a regular one.
pub struct AudioOutput(pub Box<dyn AudioSink>);

/// Forwards queued audio events to the host sink.
pub fn audio_system(mut output: NonSendMut<AudioOutput>, mut events: EventReader<AudioEvent>) {
    for event in events.read() {
        match *event {
            AudioEvent::Play(cue) => {
                trace!(?cue, "Playing one-shot cue");
                output.0.play(cue);
            }
            AudioEvent::StartLoop(cue) => {
                trace!(?cue, "Starting cue loop");
                output.0.start_loop(cue);
            }
            AudioEvent::Pause(cue) => {
                trace!(?cue, "Pausing cue");
                output.0.pause(cue);
            }
            AudioEvent::Stop(cue) => {
                trace!(?cue, "Stopping cue");
                output.0.stop(cue);
            }
        }
    }
}
