#![no_main]

use libfuzzer_sys::fuzz_target;
use picofloat::Format;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let v = f64::from_le_bytes(data[..8].try_into().unwrap());

    for f in [
        Format::x4(12, true).unwrap(),
        Format::x4(8, false).unwrap(),
        Format::x3(12, true).unwrap(),
        Format::x2(10, true).unwrap(),
    ] {
        let x1 = f.decode(f.encode(v));
        let x2 = f.decode(f.encode(x1));
        // A value that has passed through the codec is a fixed point,
        // NaN and infinities included (they map to defined codes).
        assert!(x1 == x2, "re-quantization moved {x1} to {x2} for input {v}");

        if v.is_nan() {
            assert_eq!(f.encode(v), 0);
        }
    }
});
