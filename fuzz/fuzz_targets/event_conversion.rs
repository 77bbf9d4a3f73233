#![no_main]
use libfuzzer_sys::fuzz_target;

#[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
fuzz_target!(|data: &[u8]| {
    use kernel_kqueue::event::{Data, Id};
    use kernel_kqueue::{filter, Event, Filter, Flags};

    let mut bytes = [0u8; 32];
    let len = data.len().min(bytes.len());
    bytes[..len].copy_from_slice(&data[..len]);

    let word = |i: usize| u64::from_ne_bytes([
        bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3],
        bytes[i + 4], bytes[i + 5], bytes[i + 6], bytes[i + 7],
    ]);

    let event = Event::new(
        Id::new(word(0) as usize),
        Filter::from_raw(i16::from_ne_bytes([bytes[8], bytes[9]])),
        Flags::from_bits_retain(u16::from_ne_bytes([bytes[10], bytes[11]])),
    )
    .with_fflags(filter::Flags::from_bits_retain(u32::from_ne_bytes([
        bytes[12], bytes[13], bytes[14], bytes[15],
    ])))
    .with_filter_data(filter::Data::new(word(16) as isize))
    .with_data(Data::new(word(24) as usize as u64));

    assert_eq!(Event::from_raw(&event.to_raw()), event);
});

#[cfg(not(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly")))]
fuzz_target!(|_data: &[u8]| {});
