//! Event source identifiers.

use std::fmt;
use std::num::TryFromIntError;
use std::os::unix::io::RawFd;

use crate::Descriptor;

/// Identifier of an event source as the kernel sees it.
///
/// For descriptor-based filters this is the descriptor number; for signals
/// the signal number, for processes the pid, and for timers or user events
/// any value the caller picks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Id(usize);

impl Id {
    pub const fn new(raw: usize) -> Self {
        Id(raw)
    }

    pub const fn raw(self) -> usize {
        self.0
    }

    /// Identifier of a descriptor. Negative descriptors keep their bit
    /// pattern, so the kernel rejects them instead of watching a random fd.
    pub const fn from_descriptor(fd: Descriptor) -> Self {
        Id(fd.raw() as usize)
    }
}

impl From<usize> for Id {
    fn from(raw: usize) -> Self {
        Id(raw)
    }
}

impl From<Id> for usize {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl From<Descriptor> for Id {
    fn from(fd: Descriptor) -> Self {
        Id::from_descriptor(fd)
    }
}

/// Fails when the identifier is outside the descriptor range, e.g. a timer
/// id or the bit pattern of a negative descriptor.
impl TryFrom<Id> for Descriptor {
    type Error = TryFromIntError;

    fn try_from(id: Id) -> Result<Self, Self::Error> {
        RawFd::try_from(id.0).map(Descriptor::from_raw)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
