use std::mem;
use std::os::unix::io::{AsRawFd, RawFd};
use std::time::Duration;

use kernel_primitives::{time, Descriptor};

use crate::buffer::with_raw_events;
use crate::{sys, Error, Event};

/// Registers `changes` without waiting.
///
/// Changes are applied in order, so a delete following an add of the same
/// `(id, filter)` leaves nothing registered. An empty slice returns without
/// a kernel call.
pub fn register(kq: Descriptor, changes: &[Event]) -> Result<(), Error> {
    if changes.is_empty() {
        log::trace!("register({}): no changes", kq.raw());
        return Ok(());
    }
    with_raw_events(changes.len(), |raw| {
        fill(raw, changes);
        sys::register(kq, raw)
    })
}

/// Waits up to `timeout` (`None`: forever) for ready events.
///
/// The first `n` slots of `events` are overwritten with the delivered
/// events, where `n` is the returned count; the remaining slots are left
/// as they were. An empty slice returns `Ok(0)` without a kernel call.
pub fn poll(kq: Descriptor, events: &mut [Event], timeout: Option<Duration>) -> Result<usize, Error> {
    if events.is_empty() {
        log::trace!("poll({}): empty buffer", kq.raw());
        return Ok(0);
    }
    let ts = time::timespec(timeout);
    with_raw_events(events.len(), |raw| {
        let n = sys::poll(kq, raw, ts.as_ref())?;
        drain(&raw[..n], events);
        Ok(n)
    })
}

/// Applies `changes` and waits for `events` in a single kernel call.
///
/// With room in `events`, a change the kernel rejects is delivered as an
/// event carrying [`crate::Flags::ERROR`] with the errno in `filter_data`
/// rather than failing the call. Returns the number of events written.
pub fn submit(
    kq: Descriptor,
    changes: &[Event],
    events: &mut [Event],
    timeout: Option<Duration>,
) -> Result<usize, Error> {
    if changes.is_empty() && events.is_empty() {
        log::trace!("submit({}): nothing to do", kq.raw());
        return Ok(0);
    }
    let ts = time::timespec(timeout);
    with_raw_events(changes.len() + events.len(), |raw| {
        let (raw_changes, raw_events) = raw.split_at_mut(changes.len());
        fill(raw_changes, changes);
        let n = sys::kevent(kq, raw_changes, raw_events, ts.as_ref())?;
        drain(&raw_events[..n], events);
        Ok(n)
    })
}

fn fill(raw: &mut [libc::kevent], events: &[Event]) {
    for (slot, event) in raw.iter_mut().zip(events) {
        *slot = event.to_raw();
    }
}

fn drain(raw: &[libc::kevent], events: &mut [Event]) {
    for (slot, record) in events.iter_mut().zip(raw) {
        *slot = Event::from_raw(record);
    }
}

/// Kernel event queue that closes itself on drop.
///
/// Wraps the free functions for callers that want the descriptor's lifetime
/// tied to a value. It adds no locking; the kernel serializes concurrent
/// calls on one queue, and ordering between threads is up to the caller.
#[derive(Debug)]
pub struct Kqueue {
    kq: Descriptor,
}

impl Kqueue {
    pub fn new() -> Result<Self, Error> {
        Ok(Kqueue { kq: sys::create()? })
    }

    /// Takes ownership of a queue descriptor obtained from [`sys::create`].
    pub fn from_descriptor(kq: Descriptor) -> Self {
        Kqueue { kq }
    }

    pub fn descriptor(&self) -> Descriptor {
        self.kq
    }

    /// Gives up ownership without closing.
    pub fn into_descriptor(self) -> Descriptor {
        let kq = self.kq;
        mem::forget(self);
        kq
    }

    pub fn register(&self, changes: &[Event]) -> Result<(), Error> {
        register(self.kq, changes)
    }

    pub fn poll(&self, events: &mut [Event], timeout: Option<Duration>) -> Result<usize, Error> {
        poll(self.kq, events, timeout)
    }

    pub fn submit(
        &self,
        changes: &[Event],
        events: &mut [Event],
        timeout: Option<Duration>,
    ) -> Result<usize, Error> {
        submit(self.kq, changes, events, timeout)
    }
}

impl AsRawFd for Kqueue {
    fn as_raw_fd(&self) -> RawFd {
        self.kq.raw()
    }
}

impl Drop for Kqueue {
    fn drop(&mut self) {
        if let Err(code) = self.kq.close() {
            log::debug!("closing kqueue {} failed: {}", self.kq.raw(), code);
        }
    }
}
