//! Safe, typed access to the kqueue(2)/kevent(2) notification channel of
//! BSD-derived kernels.
//!
//! The crate is a thin layer: one kernel call per operation, no threads, no
//! registration bookkeeping. A caller
//!
//! 1. creates a channel with [`create`] (or [`Kqueue::new`]),
//! 2. registers interest with [`register`] using [`Event`] values,
//! 3. waits for ready events with [`poll`], or does both at once with
//!    [`submit`].
//!
//! The raw `struct kevent` interface stays available in [`sys`] for callers
//! that manage their own record buffers.
//!
//! ```ignore
//! use std::time::Duration;
//! use kernel_kqueue::{Event, Filter, Flags};
//!
//! let kq = kernel_kqueue::create()?;
//! kernel_kqueue::register(kq, &[Event::for_descriptor(read_end, Filter::READ, Flags::ADD)])?;
//!
//! let mut ready = [Event::default(); 16];
//! let n = kernel_kqueue::poll(kq, &mut ready, Some(Duration::from_millis(100)))?;
//! for event in &ready[..n] {
//!     // dispatch on event.id / event.data
//! }
//! ```
//!
//! Value types, the flag algebra and [`Error`] build on every Unix target;
//! kernel constants and everything that talks to the kernel only on kqueue
//! targets (Apple platforms, FreeBSD, DragonFly BSD).
#![cfg(unix)]

#[macro_use]
mod tagged;

pub mod error;
pub mod event;
pub mod filter;
pub mod flags;

#[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
mod buffer;
#[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
mod kqueue;
#[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
pub mod sys;

pub use error::Error;
pub use event::Event;
pub use filter::Filter;
pub use flags::Flags;
pub use kernel_primitives::{self as primitives, Descriptor};

#[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
pub use kqueue::{poll, register, submit, Kqueue};
#[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
pub use sys::create;
