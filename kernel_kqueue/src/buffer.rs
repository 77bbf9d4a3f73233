//! Scratch space for raw kevent records.
//!
//! Typed calls convert `Event` values into kernel records right before the
//! syscall and back right after it. The records live only for the duration
//! of [`with_raw_events`] and are dropped on every exit of the closure,
//! unwinding included.

use std::mem;

/// Requests up to this many records stay on the stack.
const STACK_CAPACITY: usize = 32;

fn zeroed() -> libc::kevent {
    // SAFETY: kevent is integers and a pointer; all-zero is a valid value.
    unsafe { mem::zeroed() }
}

/// Runs `f` with `len` zeroed raw records.
pub(crate) fn with_raw_events<R>(len: usize, f: impl FnOnce(&mut [libc::kevent]) -> R) -> R {
    if len <= STACK_CAPACITY {
        let mut stack = [zeroed(); STACK_CAPACITY];
        f(&mut stack[..len])
    } else {
        let mut heap = vec![zeroed(); len];
        f(&mut heap)
    }
}
