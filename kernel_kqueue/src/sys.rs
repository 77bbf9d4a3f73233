//! kqueue(2)/kevent(2) on raw kernel records.
//!
//! Every function here makes at most one kernel call. Failures are turned
//! into [`Error`] at this boundary: `EINTR` becomes [`Error::Interrupted`],
//! any other errno [`Error::Kevent`]. A non-negative return is success, zero
//! included.

use std::os::raw::c_int;
use std::ptr;
use std::time::Duration;

use kernel_primitives::error::Code;
use kernel_primitives::{time, Descriptor};

use crate::Error;

/// Allocates a new kernel event queue.
///
/// The caller owns the returned descriptor and releases it with
/// [`Descriptor::close`] (or hands it to [`crate::Kqueue`]).
pub fn create() -> Result<Descriptor, Error> {
    // SAFETY: kqueue(2) takes no arguments.
    let kq = unsafe { libc::kqueue() };
    if kq < 0 {
        let code = Code::last_os_error();
        log::debug!("kqueue() failed: {}", code);
        return Err(Error::Create(code));
    }
    log::trace!("kqueue() -> {}", kq);
    Ok(Descriptor::from_raw(kq))
}

/// The kevent(2) call itself.
///
/// Applies `nchanges` records from `changelist`, then waits up to `timeout`
/// (null: forever, zero: not at all) for up to `nevents` records written to
/// `eventlist`. Returns the number of records written.
///
/// # Safety
///
/// `changelist` must be valid for reading `nchanges` records and
/// `eventlist` valid for writing `nevents` records (either may be null when
/// its count is zero). `timeout` must be null or point to a valid timespec.
/// Routing data in `changelist` is stored by the kernel as-is.
pub unsafe fn kevent_raw(
    kq: Descriptor,
    changelist: *const libc::kevent,
    nchanges: c_int,
    eventlist: *mut libc::kevent,
    nevents: c_int,
    timeout: *const libc::timespec,
) -> Result<usize, Error> {
    log::trace!(
        "kevent({}, nchanges={}, nevents={}, timeout={})",
        kq.raw(),
        nchanges,
        nevents,
        if timeout.is_null() { "infinite" } else { "bounded" }
    );
    // SAFETY: pointer validity is the caller's contract.
    let n = unsafe { libc::kevent(kq.raw(), changelist, nchanges, eventlist, nevents, timeout) };
    if n < 0 {
        let code = Code::last_os_error();
        if code.is_interrupted() {
            log::debug!("kevent({}) interrupted", kq.raw());
            return Err(Error::Interrupted);
        }
        log::debug!("kevent({}) failed: {}", kq.raw(), code);
        return Err(Error::Kevent(code));
    }
    Ok(n as usize)
}

/// Change count as the kernel takes it.
///
/// A list longer than `c_int::MAX` cannot be passed without dropping changes,
/// so it is rejected before the call with `EINVAL`, the code the kernel uses
/// for a bad `nchanges`.
fn change_count(len: usize) -> Result<c_int, Error> {
    c_int::try_from(len).map_err(|_| {
        log::debug!("kevent: {} changes exceed c_int", len);
        Error::Kevent(Code::from_raw(libc::EINVAL))
    })
}

/// Safe form of [`kevent_raw`] over record slices.
///
/// With room in `events`, the kernel reports a failing change as a record
/// carrying `EV_ERROR` (errno in `data`) instead of failing the whole call.
///
/// # Errors
///
/// Besides the kernel's own failures, a change list longer than `c_int::MAX`
/// fails with `Error::Kevent(EINVAL)` without entering the kernel. An
/// oversized `events` buffer is only filled up to `c_int::MAX` records.
pub fn kevent(
    kq: Descriptor,
    changes: &[libc::kevent],
    events: &mut [libc::kevent],
    timeout: Option<&libc::timespec>,
) -> Result<usize, Error> {
    let nchanges = change_count(changes.len())?;
    // The kernel never writes more than it is told, so capping is safe.
    let nevents = c_int::try_from(events.len()).unwrap_or(c_int::MAX);
    let changelist = if changes.is_empty() { ptr::null() } else { changes.as_ptr() };
    let eventlist = if events.is_empty() { ptr::null_mut() } else { events.as_mut_ptr() };

    // SAFETY: both pointers come from live slices of at least the given
    // lengths, and the timeout from a live reference.
    unsafe { kevent_raw(kq, changelist, nchanges, eventlist, nevents, time::as_ptr(timeout)) }
}

/// Applies registration changes without waiting.
///
/// An empty change list returns immediately without a kernel call.
pub fn register(kq: Descriptor, changes: &[libc::kevent]) -> Result<(), Error> {
    if changes.is_empty() {
        log::trace!("register({}): no changes", kq.raw());
        return Ok(());
    }
    kevent(kq, changes, &mut [], None).map(|_| ())
}

/// Waits for ready events without changing registrations.
///
/// An empty buffer returns `Ok(0)` without a kernel call.
pub fn poll(
    kq: Descriptor,
    events: &mut [libc::kevent],
    timeout: Option<&libc::timespec>,
) -> Result<usize, Error> {
    if events.is_empty() {
        log::trace!("poll({}): empty buffer", kq.raw());
        return Ok(0);
    }
    kevent(kq, &[], events, timeout)
}

/// [`poll`] with a `Duration` timeout. `None` waits forever.
pub fn poll_for(
    kq: Descriptor,
    events: &mut [libc::kevent],
    timeout: Option<Duration>,
) -> Result<usize, Error> {
    let ts = time::timespec(timeout);
    poll(kq, events, ts.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Event, Filter, Flags};

    #[test]
    fn create_returns_descriptor() {
        let kq = create().unwrap();
        assert!(kq.raw() >= 0);
        kq.close().unwrap();
    }

    #[test]
    fn empty_calls_skip_the_kernel() {
        // Never a valid descriptor, so any kernel call would fail.
        let kq = Descriptor::from_raw(-1);
        assert_eq!(register(kq, &[]), Ok(()));
        assert_eq!(poll(kq, &mut [], None), Ok(0));
        assert_eq!(poll_for(kq, &mut [], Some(Duration::ZERO)), Ok(0));
    }

    #[test]
    fn invalid_queue_is_kevent_error() {
        let kq = Descriptor::from_raw(-1);
        let mut events = [Event::default().to_raw(); 4];
        let err = poll(kq, &mut events, None).unwrap_err();
        assert_eq!(err, Error::Kevent(Code::from_raw(libc::EBADF)));
    }

    #[test]
    fn oversized_change_list_is_rejected_before_the_kernel() {
        assert_eq!(change_count(0), Ok(0));
        assert_eq!(change_count(c_int::MAX as usize), Ok(c_int::MAX));
        let err = change_count(c_int::MAX as usize + 1).unwrap_err();
        assert_eq!(err, Error::Kevent(Code::from_raw(libc::EINVAL)));
        assert_eq!(change_count(usize::MAX), Err(err));
    }

    #[test]
    fn zero_timeout_does_not_block() {
        let kq = create().unwrap();
        let mut events = [Event::default().to_raw(); 4];
        assert_eq!(poll_for(kq, &mut events, Some(Duration::ZERO)), Ok(0));
        kq.close().unwrap();
    }

    #[test]
    fn combined_call_reports_failed_change_inline() {
        let kq = create().unwrap();
        let bad = Event::for_descriptor(Descriptor::from_raw(-1), Filter::READ, Flags::ADD).to_raw();
        let mut events = [Event::default().to_raw(); 1];
        let zero = time::from_duration(Duration::ZERO);

        let n = kevent(kq, &[bad], &mut events, Some(&zero)).unwrap();
        assert_eq!(n, 1);
        let reported = Event::from_raw(&events[0]);
        assert!(reported.flags.contains(Flags::ERROR));
        assert_eq!(reported.filter_data.raw(), libc::EBADF as isize);
        kq.close().unwrap();
    }
}
