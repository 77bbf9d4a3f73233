//! Portable building blocks consumed by the kernel event layers.
//!
//! * [`Descriptor`] – caller-owned small-integer kernel handle
//! * [`error::Code`] – platform error captured at a failing syscall
//! * [`event::Id`] – identifier the kernel attaches to an event source
//! * [`time`] – `Duration` to kernel `timespec` conversion
#![cfg(unix)]

pub mod descriptor;
pub mod error;
pub mod event;
pub mod time;

pub use descriptor::Descriptor;
