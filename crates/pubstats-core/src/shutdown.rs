//! Cooperative shutdown flag checked between records

use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide shutdown flag, set by the SIGTERM/SIGINT handler
pub fn shutdown_flag() -> &'static AtomicBool {
    static FLAG: AtomicBool = AtomicBool::new(false);
    &FLAG
}

/// Check if shutdown was requested
pub fn is_shutdown_requested() -> bool {
    shutdown_flag().load(Ordering::Relaxed)
}

/// Request shutdown (for signal handlers)
pub fn request_shutdown() {
    shutdown_flag().store(true, Ordering::Relaxed);
}

/// Clear a pending shutdown request so a new run can start
pub fn clear_shutdown() {
    shutdown_flag().store(false, Ordering::Relaxed);
}
