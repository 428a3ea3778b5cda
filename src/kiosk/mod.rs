//! Kiosk session control.
//!
//! * [`KioskOrchestrator`]: single owning task for sampling, reactions and chat.
//! * [`KioskCommand`]: requests from the window and the global hotkeys.
//! * [`CameraController`]: camera activate/deactivate with session generations.
//! * [`KioskState`] / [`SharedState`]: what the window draws each frame.

pub mod lifecycle;
pub mod runner;
pub mod state;

pub use lifecycle::CameraController;
pub use runner::{KioskCommand, KioskOrchestrator, SampleOutcome};
pub use state::{new_shared_state, shared_state_with_capacity, KioskState, SharedState};
