//! Platform error codes.

use std::fmt;
use std::io;

/// Raw `errno` value captured when a syscall reported failure.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Code(i32);

impl Code {
    pub const fn from_raw(errno: i32) -> Self {
        Code(errno)
    }

    /// The POSIX `errno` number.
    pub const fn posix(self) -> i32 {
        self.0
    }

    /// Captures the calling thread's current `errno`.
    ///
    /// Must run immediately after the failing call; anything in between
    /// (allocation, logging) may overwrite it.
    pub fn last_os_error() -> Self {
        Code(io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }

    /// `EINTR`: a blocking call was cut short by a signal.
    pub const fn is_interrupted(self) -> bool {
        self.0 == libc::EINTR
    }

    pub const fn is_bad_descriptor(self) -> bool {
        self.0 == libc::EBADF
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({})", self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", io::Error::from_raw_os_error(self.0))
    }
}

impl From<Code> for io::Error {
    fn from(code: Code) -> Self {
        io::Error::from_raw_os_error(code.0)
    }
}
