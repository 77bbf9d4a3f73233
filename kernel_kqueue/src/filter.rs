//! Filters select which condition of an event source is monitored.
//!
//! Next to the [`Filter`] tag a kevent record carries two filter-specific
//! values: the modifier bits in [`Flags`] (`NOTE_*`) and the kernel-filled
//! integer in [`Data`].

/// Monitored condition class (`EVFILT_*`).
///
/// Any raw value can be represented; the named constants cover the filters
/// this crate is used with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Filter(i16);

impl Filter {
    pub const fn from_raw(raw: i16) -> Self {
        Filter(raw)
    }

    pub const fn raw(self) -> i16 {
        self.0
    }
}

#[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
impl Filter {
    /// Descriptor has data to read. `Data` reports the byte count.
    pub const READ: Self = Filter(libc::EVFILT_READ as i16);
    /// Descriptor can be written. `Data` reports the free buffer space.
    pub const WRITE: Self = Filter(libc::EVFILT_WRITE as i16);
    /// Caller-triggered event, fired with [`Flags::TRIGGER`].
    pub const USER: Self = Filter(libc::EVFILT_USER as i16);
    /// Signal delivered to the process. `Data` reports the count since the
    /// last delivery; the signal itself still goes to its handler.
    pub const SIGNAL: Self = Filter(libc::EVFILT_SIGNAL as i16);
    /// Process lifecycle changes selected by the `NOTE_*` process flags.
    pub const PROC: Self = Filter(libc::EVFILT_PROC as i16);
    /// File changes selected by the `NOTE_*` vnode flags.
    pub const VNODE: Self = Filter(libc::EVFILT_VNODE as i16);
    /// Timer with its period in milliseconds given in `Data`. `Data`
    /// reports the number of expirations on delivery.
    pub const TIMER: Self = Filter(libc::EVFILT_TIMER as i16);
}

bitflags::bitflags! {
    /// Filter-specific modifier bits (`NOTE_*`).
    ///
    /// The same bit means different things for different filters; these
    /// bits share no space with [`crate::Flags`].
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Flags: u32 {
        /// `USER`: fire the event.
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const TRIGGER = libc::NOTE_TRIGGER as u32;
        /// `USER`: leave the stored flags as they are. Zero, so every value
        /// contains it.
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const FFNOP = libc::NOTE_FFNOP as u32;
        /// `USER`: AND the low 24 bits into the stored flags.
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const FFAND = libc::NOTE_FFAND as u32;
        /// `USER`: OR the low 24 bits into the stored flags.
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const FFOR = libc::NOTE_FFOR as u32;
        /// `USER`: replace the stored flags with the low 24 bits.
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const FFCOPY = libc::NOTE_FFCOPY as u32;

        /// `PROC`: the process exited.
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const EXIT = libc::NOTE_EXIT as u32;
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const FORK = libc::NOTE_FORK as u32;
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const EXEC = libc::NOTE_EXEC as u32;

        /// `VNODE`: the file was unlinked.
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const DELETE = libc::NOTE_DELETE as u32;
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const WRITE = libc::NOTE_WRITE as u32;
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const EXTEND = libc::NOTE_EXTEND as u32;
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const ATTRIB = libc::NOTE_ATTRIB as u32;
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const LINK = libc::NOTE_LINK as u32;
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const RENAME = libc::NOTE_RENAME as u32;
        #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
        const REVOKE = libc::NOTE_REVOKE as u32;
    }
}

impl Flags {
    pub const NONE: Self = Self::empty();
}

opaque_integer! {
    /// Filter-specific integer of a kevent record.
    ///
    /// Written by the kernel on delivery: bytes available for `READ`,
    /// expirations for `TIMER`, the errno of a failed change when the record
    /// carries `Flags::ERROR`. Registration input is zero except for filters
    /// that take a parameter here (the `TIMER` period).
    pub struct Data(isize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_identity_is_raw_value() {
        assert_eq!(Filter::from_raw(-1), Filter::from_raw(-1));
        assert_ne!(Filter::from_raw(-1), Filter::from_raw(-2));
        assert_eq!(Filter::from_raw(-42).raw(), -42);
    }

    #[test]
    fn fflags_algebra() {
        let a = Flags::from_bits_retain(0x0100_0000);
        let b = Flags::from_bits_retain(0x0000_00ff);
        assert_eq!(a | a, a);
        assert_eq!(a | Flags::NONE, a);
        assert_eq!(Flags::NONE | Flags::NONE, Flags::NONE);
        assert_eq!((a | b).bits(), 0x0100_00ff);
        assert!((a | b).contains(a));
        assert!((a | b).contains(b));
        assert!(!a.contains(b));
        assert!(a.contains(Flags::NONE));
        assert!(Flags::NONE.contains(Flags::NONE));
    }

    #[test]
    fn data_defaults_to_zero() {
        assert_eq!(Data::default(), Data::ZERO);
        assert!(Data::ZERO.is_zero());
        assert_eq!(Data::new(-5), -5isize);
        assert_eq!(isize::from(Data::from(512isize)), 512);
        assert_eq!(Data::new(7).to_string(), "7");
    }

    #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
    #[test]
    fn named_filters_are_distinct() {
        let all = [
            Filter::READ,
            Filter::WRITE,
            Filter::USER,
            Filter::SIGNAL,
            Filter::PROC,
            Filter::VNODE,
            Filter::TIMER,
        ];
        let unique: std::collections::HashSet<_> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
        assert_eq!(Filter::READ.raw(), libc::EVFILT_READ as i16);
    }

    #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
    #[test]
    fn trigger_is_kernel_bit() {
        assert_eq!(Flags::TRIGGER.bits(), libc::NOTE_TRIGGER as u32);
        assert!((Flags::TRIGGER | Flags::FFOR).contains(Flags::TRIGGER));
        assert!(!Flags::NONE.contains(Flags::TRIGGER));
    }

    #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
    #[test]
    fn ffnop_is_the_empty_control() {
        assert_eq!(Flags::FFNOP.bits(), libc::NOTE_FFNOP as u32);
        assert_eq!(Flags::FFNOP, Flags::NONE);
        assert!(Flags::TRIGGER.contains(Flags::FFNOP));
        assert_eq!((Flags::TRIGGER | Flags::FFNOP).bits(), Flags::TRIGGER.bits());
    }
}
