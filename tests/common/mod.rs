#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc, time::Duration};

use bevy_ecs::query::With;
use glam::Vec2;
use pursuit_core::{
    audio::{AudioSink, Cue},
    config::SessionConfig,
    events::SessionEvent,
    session::Session,
    systems::{Avatar, Guardian, Position},
};

/// A single forwarded sink call, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkCall {
    Play(Cue),
    StartLoop(Cue),
    Pause(Cue),
    Stop(Cue),
}

pub type CallLog = Rc<RefCell<Vec<SinkCall>>>;

/// Sink that records every cue request for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    calls: CallLog,
}

impl RecordingSink {
    pub fn new() -> (Self, CallLog) {
        let calls: CallLog = Rc::default();
        (
            Self {
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }
}

impl AudioSink for RecordingSink {
    fn play(&mut self, cue: Cue) {
        self.calls.borrow_mut().push(SinkCall::Play(cue));
    }

    fn start_loop(&mut self, cue: Cue) {
        self.calls.borrow_mut().push(SinkCall::StartLoop(cue));
    }

    fn pause(&mut self, cue: Cue) {
        self.calls.borrow_mut().push(SinkCall::Pause(cue));
    }

    fn stop(&mut self, cue: Cue) {
        self.calls.borrow_mut().push(SinkCall::Stop(cue));
    }
}

/// Square playfield whose five default targets land at x = 100..=500, y = 300.
pub const PLAYFIELD: Vec2 = Vec2::new(600.0, 600.0);

/// Builds a session on [`PLAYFIELD`] with a deterministic home placement and
/// a recording audio sink.
pub fn test_session(config: SessionConfig) -> (Session, CallLog) {
    let (sink, calls) = RecordingSink::new();
    let session = Session::with_seed(config, PLAYFIELD, Box::new(sink), 7).expect("Test session should construct");
    (session, calls)
}

pub fn default_session() -> (Session, CallLog) {
    test_session(SessionConfig::default())
}

/// Default config with the capture flash disabled, for tests that drive the
/// loop through an alert without the suspension window.
pub fn no_flash_config() -> SessionConfig {
    SessionConfig {
        flash_duration: Duration::ZERO,
        ..SessionConfig::default()
    }
}

/// Clicks through the start overlay and clears the startup cue traffic.
pub fn start(session: &mut Session, calls: &CallLog) {
    session.queue_event(SessionEvent::Click(Vec2::new(1.0, 1.0)));
    let pointer = session.avatar_position();
    session.tick(pointer);
    assert!(session.stage().is_running(), "Start click should begin the session");
    calls.borrow_mut().clear();
}

/// Takes the calls recorded since the last drain.
pub fn drain(calls: &CallLog) -> Vec<SinkCall> {
    calls.borrow_mut().drain(..).collect()
}

pub fn set_avatar_position(session: &mut Session, position: Vec2) {
    let mut query = session.world.query_filtered::<&mut Position, With<Avatar>>();
    query
        .single_mut(&mut session.world)
        .expect("Avatar should exist")
        .0 = position;
}

pub fn set_guardian_position(session: &mut Session, position: Vec2) {
    let mut query = session.world.query_filtered::<&mut Position, With<Guardian>>();
    query
        .single_mut(&mut session.world)
        .expect("Guardian should exist")
        .0 = position;
}
