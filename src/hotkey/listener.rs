//! Dedicated OS-thread listener around `rdev::listen`.
//!
//! `rdev::listen` cannot be interrupted.  Dropping [`HotkeyListener`] sets a
//! stop flag and the callback discards everything afterwards; the thread
//! itself stays parked in the OS event loop until the process exits.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::sync::mpsc;

use super::{HotkeyBindings, HotkeyEvent};

/// Handle to the running listener thread.  Drop to stop forwarding.
pub struct HotkeyListener {
    stop: Arc<AtomicBool>,
    _thread: std::thread::JoinHandle<()>,
}

impl HotkeyListener {
    /// Spawn the listener thread.  Matching shortcuts are sent on `tx` with
    /// `blocking_send`.
    pub fn start(
        mut bindings: HotkeyBindings,
        tx: mpsc::Sender<HotkeyEvent>,
    ) -> std::io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let thread = std::thread::Builder::new()
            .name("hotkey-listener".into())
            .spawn(move || {
                let result = rdev::listen(move |event| {
                    if stop_flag.load(Ordering::Relaxed) {
                        return;
                    }
                    if let Some(shortcut) = bindings.handle(&event.event_type) {
                        log::debug!("hotkey: {shortcut:?}");
                        if tx.blocking_send(shortcut).is_err() {
                            stop_flag.store(true, Ordering::Relaxed);
                        }
                    }
                });

                if let Err(e) = result {
                    log::error!("hotkey: global listener unavailable: {e:?}");
                }
            })?;

        Ok(Self {
            stop,
            _thread: thread,
        })
    }
}

impl Drop for HotkeyListener {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
