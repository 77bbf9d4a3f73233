#![allow(dead_code)]

use std::time::Duration;

use kernel_kqueue::event::Id;
use kernel_kqueue::{Descriptor, Event, Filter, Flags};

/// Wait used when an event is expected to arrive.
pub const READY: Option<Duration> = Some(Duration::from_millis(100));
/// Wait used when nothing is expected to arrive.
pub const QUIET: Option<Duration> = Some(Duration::from_millis(20));

/// One-way byte stream: `(read end, write end)`.
pub fn make_pipe() -> (Descriptor, Descriptor) {
    let mut fds = [0; 2];
    // SAFETY: `fds` has room for the two descriptors pipe(2) writes.
    let rc = unsafe { libc::pipe(fds.as_mut_ptr()) };
    assert_eq!(rc, 0, "pipe: {}", std::io::Error::last_os_error());
    (Descriptor::from_raw(fds[0]), Descriptor::from_raw(fds[1]))
}

pub fn write_byte(fd: Descriptor) {
    let byte = [0x2au8];
    // SAFETY: the buffer is valid for one byte.
    let n = unsafe { libc::write(fd.raw(), byte.as_ptr().cast(), 1) };
    assert_eq!(n, 1, "write: {}", std::io::Error::last_os_error());
}

pub fn read_byte(fd: Descriptor) {
    let mut byte = [0u8];
    // SAFETY: the buffer is valid for one byte.
    let n = unsafe { libc::read(fd.raw(), byte.as_mut_ptr().cast(), 1) };
    assert_eq!(n, 1, "read: {}", std::io::Error::last_os_error());
}

pub fn close_quietly(fd: Descriptor) {
    let _ = fd.close();
}

/// Result buffer filled with a recognizable placeholder.
pub fn placeholders(n: usize) -> Vec<Event> {
    vec![Event::new(Id::new(0), Filter::READ, Flags::NONE); n]
}

pub fn read_interest(fd: Descriptor, flags: Flags) -> Event {
    Event::for_descriptor(fd, Filter::READ, flags)
}
