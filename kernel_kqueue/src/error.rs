//! Failures of the kqueue channel.

use std::io;

pub use kernel_primitives::error::Code;

/// Why a kqueue call did not complete.
///
/// ```ignore
/// match kernel_kqueue::poll(kq, &mut ready, timeout) {
///     Ok(n) => handle(&ready[..n]),
///     Err(Error::Interrupted) => {} // a signal arrived; poll again if the budget allows
///     Err(e) => return Err(e.into()),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// `kqueue()` failed: descriptor table full, resource limit, no memory.
    #[error("kqueue creation failed ({0})")]
    Create(Code),

    /// `kevent()` failed: bad queue descriptor, invalid change, bad
    /// descriptor in a change without room to report it.
    #[error("kevent failed ({0})")]
    Kevent(Code),

    /// A signal arrived before the wait completed. Nothing failed; the
    /// call may be repeated.
    #[error("operation interrupted")]
    Interrupted,
}

impl Error {
    /// Captured platform code. `Interrupted` carries none.
    pub const fn code(self) -> Option<Code> {
        match self {
            Error::Create(code) | Error::Kevent(code) => Some(code),
            Error::Interrupted => None,
        }
    }

    pub const fn is_interrupted(self) -> bool {
        matches!(self, Error::Interrupted)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Create(code) | Error::Kevent(code) => code.into(),
            Error::Interrupted => io::Error::from_raw_os_error(libc::EINTR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn descriptions() {
        let code = Code::from_raw(libc::EMFILE);
        assert_eq!(Error::Create(code).to_string(), format!("kqueue creation failed ({code})"));
        assert_eq!(Error::Kevent(code).to_string(), format!("kevent failed ({code})"));
        assert_eq!(Error::Interrupted.to_string(), "operation interrupted");
    }

    #[test]
    fn structural_equality() {
        let ebadf = Code::from_raw(libc::EBADF);
        let einval = Code::from_raw(libc::EINVAL);
        assert_eq!(Error::Kevent(ebadf), Error::Kevent(ebadf));
        assert_ne!(Error::Kevent(ebadf), Error::Kevent(einval));
        assert_ne!(Error::Kevent(ebadf), Error::Create(ebadf));
        assert_eq!(Error::Interrupted, Error::Interrupted);

        let set: HashSet<Error> = [
            Error::Create(ebadf),
            Error::Kevent(ebadf),
            Error::Kevent(ebadf),
            Error::Interrupted,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn code_and_interruption() {
        let code = Code::from_raw(libc::EBADF);
        assert_eq!(Error::Create(code).code(), Some(code));
        assert_eq!(Error::Kevent(code).code(), Some(code));
        assert_eq!(Error::Interrupted.code(), None);
        assert!(Error::Interrupted.is_interrupted());
        assert!(!Error::Kevent(code).is_interrupted());
    }

    #[test]
    fn into_io_error() {
        let err: io::Error = Error::Kevent(Code::from_raw(libc::EBADF)).into();
        assert_eq!(err.raw_os_error(), Some(libc::EBADF));

        let err: io::Error = Error::Interrupted.into();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);
    }
}
