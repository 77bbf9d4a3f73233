use std::fmt;
use std::os::unix::io::{AsRawFd, RawFd};

use crate::error::Code;

/// Small-integer kernel handle.
///
/// A `Descriptor` is a plain value. Copying it does not duplicate the kernel
/// object and dropping it does not release it; whoever obtained it releases
/// it exactly once with [`Descriptor::close`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Descriptor(RawFd);

impl Descriptor {
    pub const fn from_raw(fd: RawFd) -> Self {
        Descriptor(fd)
    }

    pub const fn raw(self) -> RawFd {
        self.0
    }

    /// Releases the kernel object behind this handle.
    ///
    /// Every copy of the descriptor is dangling afterwards. The number may be
    /// handed out again by the kernel for an unrelated object.
    pub fn close(self) -> Result<(), Code> {
        // SAFETY: close(2) takes any integer; a stale or invalid handle is
        // reported through errno.
        let rc = unsafe { libc::close(self.0) };
        if rc < 0 {
            let code = Code::last_os_error();
            log::debug!("close({}) failed: {}", self.0, code);
            return Err(code);
        }
        log::trace!("close({})", self.0);
        Ok(())
    }
}

impl AsRawFd for Descriptor {
    fn as_raw_fd(&self) -> RawFd {
        self.0
    }
}

impl From<RawFd> for Descriptor {
    fn from(fd: RawFd) -> Self {
        Descriptor(fd)
    }
}

impl From<Descriptor> for RawFd {
    fn from(fd: Descriptor) -> Self {
        fd.0
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fd {}", self.0)
    }
}
