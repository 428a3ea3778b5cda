//! Camera session lifecycle.
//!
//! [`CameraController`] owns the active/visible flags and a session
//! generation counter.  Every activation and deactivation starts a new
//! generation so sample results from an earlier session can be recognised
//! and dropped.  Session hooks run on both edges so reaction memory never
//! leaks from one session into the next.

use std::sync::Arc;

use crate::reaction::SessionHooks;
use crate::vision::{CameraError, FrameSource};

pub struct CameraController {
    source: Arc<dyn FrameSource>,
    active: bool,
    visible: bool,
    generation: u64,
}

impl CameraController {
    pub fn new(source: Arc<dyn FrameSource>, visible: bool) -> Self {
        Self {
            source,
            active: false,
            visible,
            generation: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Identifier of the current session.  Changes on every edge.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new session: reset hooks, then acquire the device.
    ///
    /// On failure the controller stays inactive.  Activating an active
    /// session restarts it.
    pub fn activate(&mut self, hooks: &mut dyn SessionHooks) -> Result<(), CameraError> {
        if self.active {
            self.source.close();
            self.active = false;
        }
        self.generation = self.generation.wrapping_add(1);
        hooks.on_session_start();

        match self.source.open() {
            Ok(()) => {
                self.active = true;
                log::info!("camera: session {} started", self.generation);
                Ok(())
            }
            Err(e) => {
                log::error!("camera: cannot start session: {e}");
                Err(e)
            }
        }
    }

    /// End the session: release the device and reset hooks.
    ///
    /// Safe to call while inactive.
    pub fn deactivate(&mut self, hooks: &mut dyn SessionHooks) {
        if self.active {
            self.source.close();
            self.active = false;
            log::info!("camera: session {} stopped", self.generation);
        }
        self.generation = self.generation.wrapping_add(1);
        hooks.on_session_stop();
    }

    /// Show or hide the camera panel.  Sampling is unaffected.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::MockFrameSource;
    use std::sync::atomic::Ordering;

    #[derive(Default)]
    struct CountingHooks {
        starts: usize,
        stops: usize,
    }

    impl SessionHooks for CountingHooks {
        fn on_session_start(&mut self) {
            self.starts += 1;
        }
        fn on_session_stop(&mut self) {
            self.stops += 1;
        }
    }

    #[test]
    fn activate_opens_source_and_runs_start_hook() {
        let source = Arc::new(MockFrameSource::default());
        let mut camera = CameraController::new(source.clone(), true);
        let mut hooks = CountingHooks::default();

        camera.activate(&mut hooks).unwrap();

        assert!(camera.is_active());
        assert_eq!(hooks.starts, 1);
        assert_eq!(source.opened.load(Ordering::SeqCst), 1);
        assert_eq!(camera.generation(), 1);
    }

    #[test]
    fn deactivate_closes_source_and_runs_stop_hook() {
        let source = Arc::new(MockFrameSource::default());
        let mut camera = CameraController::new(source.clone(), true);
        let mut hooks = CountingHooks::default();

        camera.activate(&mut hooks).unwrap();
        camera.deactivate(&mut hooks);

        assert!(!camera.is_active());
        assert_eq!(hooks.stops, 1);
        assert_eq!(source.closed.load(Ordering::SeqCst), 1);
        assert_eq!(camera.generation(), 2);
    }

    #[test]
    fn unavailable_camera_stays_inactive() {
        let mut camera = CameraController::new(Arc::new(MockFrameSource::unavailable()), true);
        let mut hooks = CountingHooks::default();

        let err = camera.activate(&mut hooks).unwrap_err();

        assert!(matches!(err, CameraError::Unavailable(_)));
        assert!(!camera.is_active());
        assert_eq!(hooks.starts, 1);
    }

    #[test]
    fn deactivate_while_inactive_still_resets() {
        let source = Arc::new(MockFrameSource::default());
        let mut camera = CameraController::new(source.clone(), true);
        let mut hooks = CountingHooks::default();

        camera.deactivate(&mut hooks);

        assert_eq!(hooks.stops, 1);
        assert_eq!(source.closed.load(Ordering::SeqCst), 0);
        assert_eq!(camera.generation(), 1);
    }

    #[test]
    fn reactivating_restarts_session() {
        let source = Arc::new(MockFrameSource::default());
        let mut camera = CameraController::new(source.clone(), true);
        let mut hooks = CountingHooks::default();

        camera.activate(&mut hooks).unwrap();
        let first = camera.generation();
        camera.activate(&mut hooks).unwrap();

        assert!(camera.is_active());
        assert_ne!(camera.generation(), first);
        assert_eq!(source.closed.load(Ordering::SeqCst), 1);
        assert_eq!(source.opened.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn visibility_is_independent_of_activity() {
        let mut camera = CameraController::new(Arc::new(MockFrameSource::default()), true);
        assert!(!camera.toggle_visibility());
        assert!(!camera.is_active());
        assert!(camera.toggle_visibility());
    }
}
