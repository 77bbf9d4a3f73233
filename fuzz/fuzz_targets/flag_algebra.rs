#![no_main]
use kernel_kqueue::{filter, Flags};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    let a = Flags::from_bits_retain(u16::from_ne_bytes([data[0], data[1]]));
    let b = Flags::from_bits_retain(u16::from_ne_bytes([data[2], data[3]]));
    let c = Flags::from_bits_retain(u16::from_ne_bytes([data[4], data[5]]));

    assert_eq!(a | b, b | a);
    assert_eq!((a | b) | c, a | (b | c));
    assert_eq!(a | a, a);
    assert_eq!(a | Flags::NONE, a);
    assert!((a | b).contains(a));
    assert!(a.contains(Flags::NONE));
    assert_eq!(a.contains(b), (a.bits() & b.bits()) == b.bits());

    if data.len() >= 14 {
        let x = filter::Flags::from_bits_retain(u32::from_ne_bytes([data[6], data[7], data[8], data[9]]));
        let y = filter::Flags::from_bits_retain(u32::from_ne_bytes([data[10], data[11], data[12], data[13]]));
        assert_eq!(x | y, y | x);
        assert_eq!((x | y).bits(), x.bits() | y.bits());
        assert!((x | y).contains(y));
        assert_eq!(x.contains(y), (x.bits() & y.bits()) == y.bits());
    }
});
