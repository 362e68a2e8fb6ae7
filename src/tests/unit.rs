use crate::{ConstructionError, Format};

fn x4_12() -> Format {
    Format::x4(12, true).unwrap()
}

#[test]
fn test_zero_roundtrip() {
    for f in [
        Format::x4(12, true).unwrap(),
        Format::x4(13, true).unwrap(),
        Format::x4(8, false).unwrap(),
        Format::x3(12, true).unwrap(),
        Format::x2(10, true).unwrap(),
    ] {
        assert_eq!(f.encode(0.0), 0);
        assert_eq!(f.decode(f.encode(0.0)), 0.0);
    }
}

#[test]
fn test_unit_roundtrip() {
    // 1.0 must come back exactly, including for base-3 formats where the
    // affine remap is not an exact inverse without the snap.
    for f in [
        Format::x4(12, true).unwrap(),
        Format::x4(13, true).unwrap(),
        Format::x3(12, true).unwrap(),
        Format::x2(10, true).unwrap(),
    ] {
        assert_eq!(f.decode(f.encode(1.0)), 1.0);
        assert_eq!(f.decode(f.encode(-1.0)), -1.0);
    }
}

#[test]
fn test_nan_encodes_to_zero() {
    for f in [
        Format::x4(12, true).unwrap(),
        Format::x4(8, false).unwrap(),
        Format::x3(12, true).unwrap(),
        Format::x2(10, true).unwrap(),
    ] {
        assert_eq!(f.encode(f64::NAN), 0);
        assert_eq!(f.decode(f.encode(f64::NAN)), 0.0);
    }
}

#[test]
fn test_literal_12_bit() {
    let f = x4_12();
    assert_eq!(f.encode(1.567), 0x448);
    assert!((f.decode(0x448) - 1.564706).abs() < 1e-6);
    assert_eq!(f.encode(-1.567), 0xC48);
    assert!((f.decode(0xC48) + 1.564706).abs() < 1e-6);
}

#[test]
fn test_literal_13_bit() {
    let f = Format::x4(13, true).unwrap();
    assert_eq!(f.encode(1.567), 0x891);
    assert!((f.decode(0x891) - 1.568627).abs() < 1e-6);
}

#[test]
fn test_literal_delta_sequence() {
    let f = x4_12();
    let series = [
        -0.0058, 0.01, -0.0058, 0.01, 0.066, 0.123, 0.134, 0.132, 0.144, 0.145, 0.140,
    ];
    let expected = [387, -387, 387, 300, 114, 12, -2, 12, 1, -5];

    let mut last = f.encode(series[0]);
    for (i, &v) in series[1..].iter().enumerate() {
        let code = f.encode(v);
        let delta = f.get_integer_delta(last, code);
        assert_eq!(delta, expected[i], "delta {i} for value {v}");
        assert_eq!(f.use_integer_delta(last, delta), code);
        last = code;
    }
}

#[test]
fn test_max_value() {
    let f = x4_12();
    // (255 - 1/256) * 256/255
    assert!((f.max_value() - 255.996078).abs() < 1e-5);
    assert_eq!(f.min_value(), -f.max_value());

    let u = Format::x4(8, false).unwrap();
    assert!((u.max_value() - 248.968627).abs() < 1e-5);
    assert_eq!(u.min_value(), 0.0);
}

#[test]
fn test_saturation() {
    let f = x4_12();
    assert_eq!(f.encode(f.max_value()), 0x7FF);
    assert_eq!(f.encode(300.0), 0x7FF);
    assert_eq!(f.encode(-300.0), 0xFFF);
    assert_eq!(f.encode(f64::INFINITY), 0x7FF);
    assert_eq!(f.encode(f64::NEG_INFINITY), 0xFFF);
    assert_eq!(f.decode(0x7FF), f.max_value());
}

#[test]
fn test_saturation_monotonicity() {
    let f = x4_12();
    let at_max = f.decode(f.encode(f.max_value()));
    for i in 1..=1000 {
        let v = f.max_value() * (1.0 + f64::from(i) / 1000.0);
        assert_eq!(f.decode(f.encode(v)), at_max, "probe {i}");
    }
}

#[test]
fn test_unsigned_clamps_negative_to_zero() {
    let f = Format::x4(8, false).unwrap();
    assert_eq!(f.encode(-3.0), 0);
    assert_eq!(f.encode(-f64::INFINITY), 0);
    assert_eq!(f.encode(1000.0), 0xFF);
}

#[test]
fn test_dont_care_bits() {
    let f = x4_12();
    let code = f.encode(1.567);
    for junk in [0x1000u16, 0x8000, 0xA000, 0xF000] {
        let dirty = code | junk;
        assert_ne!(dirty, code);
        assert_eq!(f.decode(dirty).to_bits(), f.decode(code).to_bits());
    }
}

#[test]
fn test_idempotent_requantization() {
    let f = x4_12();
    let mut v = -300.0;
    while v < 300.0 {
        let x1 = f.decode(f.encode(v));
        let x2 = f.decode(f.encode(x1));
        assert!(x1 == x2, "re-quantization moved {v}: {x1} -> {x2}");
        v += 0.0173;
    }
}

#[test]
fn test_idempotent_requantization_base3() {
    for f in [Format::x3(12, true).unwrap(), Format::x2(10, true).unwrap()] {
        let mut v = f.min_value() * 1.5;
        let step = f.max_value() / 400.0;
        while v < f.max_value() * 1.5 {
            let x1 = f.decode(f.encode(v));
            let x2 = f.decode(f.encode(x1));
            assert!(x1 == x2, "re-quantization moved {v}: {x1} -> {x2}");
            v += step;
        }
    }
}

#[test]
fn test_delta_roundtrip_full_range() {
    let f = x4_12();
    let step = f.max_value() / 1000.0;
    let mut prev = f.encode(f.min_value());
    let mut v = f.min_value();
    while v <= f.max_value() {
        let code = f.encode(v);
        let delta = f.get_integer_delta(prev, code);
        let replayed = f.use_integer_delta(prev, delta);
        assert!(
            (f.decode(replayed) - f.decode(code)).abs() < 1e-9,
            "delta replay diverged at {v}"
        );
        prev = code;
        v += step;
    }
}

#[test]
fn test_delta_zero_is_bit_identical() {
    let f = x4_12();
    // Unused high bits must survive a zero delta untouched.
    let dirty = 0xF448u16;
    assert_eq!(f.use_integer_delta(dirty, 0), dirty);
}

#[test]
fn test_delta_saturates() {
    let f = x4_12();
    let one = f.encode(1.0);
    assert_eq!(f.use_integer_delta(one, 100_000), 0x7FF);
    assert_eq!(f.use_integer_delta(one, -100_000), 0xFFF);
    assert_eq!(f.decode(f.use_integer_delta(one, 100_000)), f.max_value());
    assert_eq!(f.decode(f.use_integer_delta(one, -100_000)), f.min_value());
}

#[test]
fn test_minus_zero_is_one_step_below_plus_zero() {
    let f = x4_12();
    let minus_zero = f.encode(-1e-12);
    assert_eq!(minus_zero, 0x800);
    let decoded = f.decode(minus_zero);
    assert_eq!(decoded, 0.0);
    assert!(decoded.is_sign_negative());
    assert_eq!(f.get_integer_delta(minus_zero, f.encode(0.0)), 1);
}

#[test]
fn test_comparable_monotonicity_exhaustive() {
    let f = x4_12();
    let mut points: Vec<(f64, u16)> = (0u16..=0xFFF)
        .map(|code| (f.decode(code), f.to_comparable(code)))
        .collect();
    points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    for w in points.windows(2) {
        if w[0].0 < w[1].0 {
            assert!(
                w[0].1 < w[1].1,
                "comparable order broken between {} and {}",
                w[0].0,
                w[1].0
            );
        }
    }
}

#[test]
fn test_comparable_identity_for_unsigned() {
    let f = Format::x4(8, false).unwrap();
    for code in 0u16..=0xFF {
        assert_eq!(f.to_comparable(code), code);
        assert_eq!(f.from_comparable(code), code);
    }
}

#[test]
fn test_comparable_bijection() {
    let f = x4_12();
    for code in 0u16..=0xFFF {
        assert_eq!(f.from_comparable(f.to_comparable(code)), code);
    }
}

#[test]
fn test_sign_bit_symmetry() {
    let f = x4_12();
    for code in 0u16..0x800 {
        assert_eq!(f.decode(code), -f.decode(code | 0x800), "code {code:#x}");
    }
}

#[test]
fn test_abs() {
    let f = x4_12();
    assert_eq!(f.abs(0xFFF), 0x7FF);
    assert_eq!(f.abs(0x448), 0x448);
    // High junk bits are stripped as well
    assert_eq!(f.abs(0xF448), 0x448);
    let u = Format::x4(8, false).unwrap();
    assert_eq!(u.abs(0xFF), 0xFF);
}

#[test]
fn test_no_exponent_field() {
    // 16-bit unsigned fixed-exponent layout: the whole code is mantissa.
    let f = Format::new(16, 2, 0, -1, false).unwrap();
    assert_eq!(f.mantissa_bits(), 16);
    assert!((f.decode(f.encode(0.3)) - 0.3).abs() < 1e-4);
    assert_eq!(f.encode(2.0), 0xFFFF);
    assert!(f.max_value() < 1.0);
}

#[test]
fn test_construction_errors() {
    assert_eq!(
        Format::new(17, 2, 4, -8, true).unwrap_err(),
        ConstructionError::WidthTooLarge { total_bits: 17 }
    );
    assert_eq!(
        Format::new(12, 5, 4, -8, true).unwrap_err(),
        ConstructionError::UnsupportedBase { base: 5 }
    );
    assert_eq!(
        Format::new(5, 2, 4, -8, true).unwrap_err(),
        ConstructionError::MantissaTooNarrow {
            total_bits: 5,
            exponent_bits: 4,
            signed: true,
        }
    );
    // Mantissa feasibility is checked before the table capacity.
    assert_eq!(
        Format::new(12, 2, 5, -8, true).unwrap_err(),
        ConstructionError::ExponentTooWide { exponent_bits: 5 }
    );
    assert_eq!(
        Format::new(12, 2, 4, 0, true).unwrap_err(),
        ConstructionError::MinExponentNotNegative { min_exponent: 0 }
    );
}

#[test]
fn test_construction_error_display() {
    let err = Format::new(17, 2, 4, -8, true).unwrap_err();
    assert_eq!(err.to_string(), "total width 17 exceeds 16 bits");
}

#[test]
fn test_params_roundtrip() {
    let f = Format::x3(12, true).unwrap();
    let g = Format::from_params(f.params()).unwrap();
    assert_eq!(f.params(), g.params());
    for v in [-5.0, -0.37, 0.0, 0.041, 1.0, 7.3] {
        assert_eq!(f.encode(v), g.encode(v));
    }
}

#[test]
fn test_preset_layouts() {
    let f = x4_12();
    assert_eq!(f.total_bits(), 12);
    assert_eq!(f.exponent_base(), 2);
    assert_eq!(f.exponent_bits(), 4);
    assert_eq!(f.mantissa_bits(), 7);
    assert_eq!(f.min_exponent(), -8);
    assert!(f.signed());

    let f = Format::x3(12, true).unwrap();
    assert_eq!(f.exponent_base(), 3);
    assert_eq!(f.exponent_bits(), 3);
    assert_eq!(f.mantissa_bits(), 8);
    assert_eq!(f.min_exponent(), -6);

    let f = Format::x2(10, false).unwrap();
    assert_eq!(f.exponent_base(), 3);
    assert_eq!(f.exponent_bits(), 2);
    assert_eq!(f.mantissa_bits(), 8);
    assert_eq!(f.min_exponent(), -3);
}
