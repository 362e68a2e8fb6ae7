#![no_main]

use libfuzzer_sys::fuzz_target;
use picofloat::Format;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let code = u16::from_le_bytes([data[0], data[1]]);

    for f in [
        Format::x4(12, true).unwrap(),
        Format::x4(13, true).unwrap(),
        Format::x4(8, false).unwrap(),
        Format::x3(12, true).unwrap(),
        Format::x2(10, true).unwrap(),
    ] {
        // Property 1: decode is total and finite for any bit pattern
        let v = f.decode(code);
        assert!(v.is_finite(), "decode produced {v}");

        // Property 2: bits above total_bits are don't-care
        let mask = ((1u32 << f.total_bits()) - 1) as u16;
        assert_eq!(
            f.decode(code).to_bits(),
            f.decode(code & mask).to_bits(),
            "high bits leaked into decode"
        );

        // Property 3: decoded values stay inside the representable range
        assert!(v >= f.min_value() && v <= f.max_value(), "decode out of range: {v}");
    }
});
