//! Action, behavior and status bits of a kevent record.

bitflags::bitflags! {
    /// `EV_*` bits.
    ///
    /// On input the action bits (`ADD`, `DELETE`, `ENABLE`, `DISABLE`) say
    /// what to do with the registration and the behavior bits (`CLEAR`,
    /// `DISPATCH`, `ONESHOT`) how it fires. On output the kernel adds status
    /// bits (`EOF`, `ERROR`). Bits this type does not name are kept as-is.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Flags: u16 {
        /// Add the registration, or modify it when it already exists.
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const ADD = libc::EV_ADD as u16;
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const DELETE = libc::EV_DELETE as u16;
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const ENABLE = libc::EV_ENABLE as u16;
        /// Keep the registration but stop delivering it.
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const DISABLE = libc::EV_DISABLE as u16;

        /// Edge-triggered: reset the state after delivery.
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const CLEAR = libc::EV_CLEAR as u16;
        /// Disable the registration after each delivery; re-arm with `ENABLE`.
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const DISPATCH = libc::EV_DISPATCH as u16;
        /// Delete the registration after the first delivery.
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const ONESHOT = libc::EV_ONESHOT as u16;

        /// Output only: end of file or the peer went away.
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const EOF = libc::EV_EOF as u16;
        /// Output only: the change failed, `filter_data` holds the errno.
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const ERROR = libc::EV_ERROR as u16;
    }
}

impl Flags {
    pub const NONE: Self = Self::empty();
}
