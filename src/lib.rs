//! Emotion-reactive kiosk.
//!
//! The camera is sampled on a timer, each frame is classified by an external
//! expression service, and the dominant label drives a label-memoized
//! [`reaction::ReactionMachine`] that speaks short phrases.  A free-text chat
//! channel to an OpenAI-compatible service runs alongside.

pub mod app;
pub mod chat;
pub mod config;
pub mod emotion;
pub mod hotkey;
pub mod kiosk;
pub mod reaction;
pub mod speech;
pub mod vision;
