//! Timeout conversion for blocking kernel waits.
//!
//! A missing timeout and a zero timeout mean different things to the kernel:
//! `None` becomes a null `timespec` pointer (block until something happens),
//! `Some(Duration::ZERO)` becomes a zeroed `timespec` (poll and return).

use std::mem;
use std::time::Duration;

/// Converts an optional wait duration into the kernel representation.
pub fn timespec(timeout: Option<Duration>) -> Option<libc::timespec> {
    timeout.map(from_duration)
}

/// Converts a duration into a `timespec`. Seconds beyond `time_t` saturate.
pub fn from_duration(duration: Duration) -> libc::timespec {
    // SAFETY: timespec is plain integers (plus padding on some targets).
    let mut ts: libc::timespec = unsafe { mem::zeroed() };
    ts.tv_sec = libc::time_t::try_from(duration.as_secs()).unwrap_or(libc::time_t::MAX);
    ts.tv_nsec = duration.subsec_nanos() as _;
    ts
}

/// Reference to pass as the timeout argument, null when absent.
pub fn as_ptr(ts: Option<&libc::timespec>) -> *const libc::timespec {
    ts.map_or(std::ptr::null(), |ts| ts as *const libc::timespec)
}
