//! OS signal capture.
//!
//! Signal handlers only flip atomic flags; the tick loop reads and resets them
//! at the start of a tick, so a resize is never applied halfway through one.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Flags shared between signal handlers, the input poller and the tick loop
#[derive(Debug, Clone, Default)]
pub struct SignalFlags {
    resize: Arc<AtomicBool>,
    terminate: Arc<AtomicBool>,
}

impl SignalFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hook SIGWINCH to the resize flag and SIGTERM/SIGHUP/SIGINT to the
    /// terminate flag. No-op on platforms without those signals.
    pub fn register_os_handlers(&self) -> io::Result<()> {
        #[cfg(unix)]
        {
            use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM, SIGWINCH};
            use signal_hook::flag;

            flag::register(SIGWINCH, Arc::clone(&self.resize))?;
            for sig in [SIGTERM, SIGHUP, SIGINT] {
                flag::register(sig, Arc::clone(&self.terminate))?;
            }
        }
        Ok(())
    }

    pub fn raise_resize(&self) {
        self.resize.store(true, Ordering::SeqCst);
    }

    /// Consume a pending resize; true if one was raised since the last call
    pub fn take_resize(&self) -> bool {
        self.resize.swap(false, Ordering::SeqCst)
    }

    pub fn request_terminate(&self) {
        self.terminate.store(true, Ordering::SeqCst);
    }

    pub fn terminate_requested(&self) -> bool {
        self.terminate.load(Ordering::SeqCst)
    }
}
