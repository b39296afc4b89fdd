//! This module defines the audio seam between the core and the host.
//!
//! The core never touches an audio device; it names cues and forwards
//! fire-and-forget playback requests to whatever sink the host installed.

use strum_macros::EnumIter;

/// The named audio cues the interaction loop drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Cue {
    /// Background ambience, looped while the session runs calmly.
    Ambient,
    /// One-shot sting played on capture and on guardian clicks.
    Alert,
    /// Looping cue layered in while the alert is active.
    Tension,
}

/// Host-side audio output.
///
/// All operations are fire-and-forget: the core never waits on playback, and
/// repeated [`AudioSink::play`] calls for the same cue may overlap or restart
/// at the sink's discretion.
pub trait AudioSink {
    /// Play a cue once from the start.
    fn play(&mut self, cue: Cue);

    /// Begin looping a cue until it is paused or stopped.
    fn start_loop(&mut self, cue: Cue);

    /// Pause a cue, keeping its position for a later loop restart.
    fn pause(&mut self, cue: Cue);

    /// Stop a cue entirely.
    fn stop(&mut self, cue: Cue);
}

/// A sink that discards every request, for hosts and tests without audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _cue: Cue) {}

    fn start_loop(&mut self, _cue: Cue) {}

    fn pause(&mut self, _cue: Cue) {}

    fn stop(&mut self, _cue: Cue) {}
}
