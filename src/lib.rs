//! Pursuit game core library crate.
//!
//! Implements the frame-driven interaction loop of a pursuit scenario: a
//! pointer-following avatar, a fixed row of targets, and a guardian that
//! intercepts whichever target the avatar closes in on. Platform concerns
//! (canvas, audio device, input wiring) stay with the host, which drives a
//! [`session::Session`] once per frame and consumes the [`scene::Scene`] it
//! produces.

pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod helper;
pub mod scene;
pub mod session;
pub mod systems;
