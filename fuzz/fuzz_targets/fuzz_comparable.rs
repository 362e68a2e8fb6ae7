#![no_main]

use libfuzzer_sys::fuzz_target;
use picofloat::Format;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let a = u16::from_le_bytes([data[0], data[1]]);
    let b = u16::from_le_bytes([data[2], data[3]]);

    for f in [
        Format::x4(12, true).unwrap(),
        Format::x4(8, false).unwrap(),
        Format::x2(10, true).unwrap(),
    ] {
        let mask = ((1u32 << f.total_bits()) - 1) as u16;

        // Bijection on the code space, both directions
        assert_eq!(f.from_comparable(f.to_comparable(a)), a & mask);
        assert_eq!(f.to_comparable(f.from_comparable(a)), a & mask);

        // Monotonicity: unsigned comparable order equals decoded order
        if f.decode(a) < f.decode(b) {
            assert!(f.to_comparable(a) < f.to_comparable(b));
        }
    }
});
