#![cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]

// Closed descriptor numbers are reused by any thread that opens a file, so
// these checks live in their own binary and run as one test.

mod common;

use common::*;
use kernel_kqueue::error::Code;
use kernel_kqueue::{Descriptor, Error, Flags};

#[test]
fn calls_on_closed_descriptors() {
    let kq = kernel_kqueue::create().unwrap();

    let err = kernel_kqueue::register(kq, &[read_interest(Descriptor::from_raw(-1), Flags::ADD)])
        .unwrap_err();
    assert_eq!(err, Error::Kevent(Code::from_raw(libc::EBADF)));

    let (read, write) = make_pipe();
    read.close().unwrap();
    write.close().unwrap();
    let err = kernel_kqueue::register(kq, &[read_interest(read, Flags::ADD)]).unwrap_err();
    assert!(matches!(err, Error::Kevent(_)));

    kq.close().unwrap();
    let mut results = placeholders(4);
    let err = kernel_kqueue::poll(kq, &mut results, QUIET).unwrap_err();
    assert_eq!(err, Error::Kevent(Code::from_raw(libc::EBADF)));
    assert_eq!(err.code().map(Code::is_bad_descriptor), Some(true));

    let err = kernel_kqueue::register(kq, &[read_interest(read, Flags::ADD)]).unwrap_err();
    assert_eq!(err, Error::Kevent(Code::from_raw(libc::EBADF)));

    // Empty requests never reach the kernel.
    assert_eq!(kernel_kqueue::register(kq, &[]), Ok(()));
    assert_eq!(kernel_kqueue::poll(kq, &mut [], QUIET), Ok(0));
    assert_eq!(kernel_kqueue::submit(kq, &[], &mut [], QUIET), Ok(0));
}
