//! The kevent record as a value type.

use std::ptr::NonNull;

use kernel_primitives::Descriptor;
pub use kernel_primitives::event::Id;

use crate::{filter, Filter, Flags};

opaque_integer! {
    /// Caller-chosen routing value, handed back unchanged on delivery.
    ///
    /// Typically an index into a table of live handlers or the address of
    /// a handler context. [`Data::ZERO`] means "no association" and is what
    /// a null address encodes to.
    ///
    /// An address stored here is only a bit pattern. It is meaningful in the
    /// process that stored it, and only while the memory it points to is
    /// alive; nothing here tracks either. The kernel field is pointer sized,
    /// so on 32-bit targets only the low 32 bits survive a trip through the
    /// kernel.
    pub struct Data(u64);
}

impl Data {
    /// Encodes the address of `ptr`.
    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Data(ptr as usize as u64)
    }

    pub fn from_mut_ptr<T>(ptr: *mut T) -> Self {
        Data(ptr as usize as u64)
    }

    /// The stored address, `None` for zero.
    ///
    /// Dereferencing the result is only sound under the conditions described
    /// on the type.
    pub fn as_ptr<T>(self) -> Option<NonNull<T>> {
        NonNull::new(self.0 as usize as *mut T)
    }
}

impl<T> From<*const T> for Data {
    fn from(ptr: *const T) -> Self {
        Data::from_ptr(ptr)
    }
}

impl<T> From<*mut T> for Data {
    fn from(ptr: *mut T) -> Self {
        Data::from_mut_ptr(ptr)
    }
}

impl<T> From<NonNull<T>> for Data {
    fn from(ptr: NonNull<T>) -> Self {
        Data::from_mut_ptr(ptr.as_ptr())
    }
}

impl<T> From<Option<NonNull<T>>> for Data {
    fn from(ptr: Option<NonNull<T>>) -> Self {
        ptr.map_or(Data::ZERO, |ptr| Data::from_mut_ptr(ptr.as_ptr()))
    }
}

/// One registration change or one delivered event.
///
/// The same record goes both ways: the caller fills `id`, `filter`, `flags`
/// (and possibly `fflags`, `filter_data`, `data`) to register, and the kernel
/// fills all of them on delivery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub id: Id,
    pub filter: Filter,
    pub flags: Flags,
    pub fflags: filter::Flags,
    pub filter_data: filter::Data,
    pub data: Data,
}

impl Event {
    /// Event with no filter flags, zero filter data and no routing data.
    pub const fn new(id: Id, filter: Filter, flags: Flags) -> Self {
        Event {
            id,
            filter,
            flags,
            fflags: filter::Flags::NONE,
            filter_data: filter::Data::ZERO,
            data: Data::ZERO,
        }
    }

    pub const fn for_descriptor(fd: Descriptor, filter: Filter, flags: Flags) -> Self {
        Event::new(Id::from_descriptor(fd), filter, flags)
    }

    pub fn with_fflags(self, fflags: filter::Flags) -> Self {
        Event { fflags, ..self }
    }

    pub fn with_filter_data(self, filter_data: filter::Data) -> Self {
        Event { filter_data, ..self }
    }

    pub fn with_data(self, data: impl Into<Data>) -> Self {
        Event { data: data.into(), ..self }
    }

    /// The descriptor this event is about, for descriptor-based filters.
    pub fn descriptor(&self) -> Option<Descriptor> {
        Descriptor::try_from(self.id).ok()
    }
}

#[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
impl Event {
    /// Reads a kernel record field for field.
    // Field widths differ per target; the casts are no-ops on some of them.
    #[allow(clippy::unnecessary_cast)]
    pub fn from_raw(raw: &libc::kevent) -> Self {
        Event {
            id: Id::new(raw.ident as usize),
            filter: Filter::from_raw(raw.filter as i16),
            flags: Flags::from_bits_retain(raw.flags as u16),
            fflags: filter::Flags::from_bits_retain(raw.fflags as u32),
            filter_data: filter::Data::new(raw.data as isize),
            data: Data::new(raw.udata as usize as u64),
        }
    }

    /// Builds the kernel record. Platform extension fields are zero.
    #[allow(clippy::unnecessary_cast)]
    pub fn to_raw(&self) -> libc::kevent {
        // SAFETY: kevent is integers and a pointer; all-zero is a valid value.
        let mut raw: libc::kevent = unsafe { std::mem::zeroed() };
        raw.ident = self.id.raw() as _;
        raw.filter = self.filter.raw() as _;
        raw.flags = self.flags.bits() as _;
        raw.fflags = self.fflags.bits() as _;
        raw.data = self.filter_data.raw() as _;
        raw.udata = self.data.raw() as usize as _;
        raw
    }
}

#[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
impl From<libc::kevent> for Event {
    fn from(raw: libc::kevent) -> Self {
        Event::from_raw(&raw)
    }
}

#[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
impl From<Event> for libc::kevent {
    fn from(event: Event) -> Self {
        event.to_raw()
    }
}
