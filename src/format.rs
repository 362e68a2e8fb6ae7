//! Format descriptor: the immutable configuration shared by every codec
//! operation.
//!
//! A [`Format`] is built once per distinct bit layout and then reused for all
//! encode/decode/delta calls. It is never mutated after construction, so a
//! single instance can be shared by reference across threads without
//! synchronization.

use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;

/// Scale-table capacity; bounds the exponent field at 4 bits.
pub(crate) const MAX_SCALE_ENTRIES: usize = 16;

/// The five user-chosen parameters that fully determine a [`Format`].
///
/// This is the serializable surface of the crate: codes carry no metadata
/// about their own layout, so encoder and decoder must agree on the
/// parameters out-of-band. Persist a `Params` (e.g. as JSON next to the
/// stored codes) and rebuild the descriptor with [`Format::from_params`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Total code width in bits (1-16)
    pub total_bits: u32,
    /// Multiplicative base between adjacent scale entries (2 or 3)
    pub exponent_base: u32,
    /// Width of the exponent field in bits (0-4)
    pub exponent_bits: u32,
    /// Real exponent represented by an all-zero exponent field (negative)
    pub min_exponent: i32,
    /// Whether bit `total_bits - 1` is a sign bit
    pub signed: bool,
}

/// Immutable descriptor for one binary floating-point layout.
///
/// Layout, MSB to LSB: `[sign (0 or 1 bit)][exponent (X bits)][mantissa (M bits)]`,
/// left-padded with don't-care bits up to the `u16` container.
///
/// # Example
/// ```
/// use picofloat::Format;
///
/// // 12-bit signed, base-2 exponent, bias -8
/// let f = Format::x4(12, true).unwrap();
/// assert_eq!(f.encode(1.567), 0x448);
/// assert!((f.decode(0x448) - 1.564706).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct Format {
    params: Params,
    pub(crate) mantissa_bits: u32,
    pub(crate) total_mask: u16,
    pub(crate) sign_mask: u16,
    pub(crate) mantissa_mask: u16,
    pub(crate) exponent_mask: u16,
    /// `scale[i] = base^(min_exponent + i)`, `1 << exponent_bits` entries used
    pub(crate) scale: [f64; MAX_SCALE_ENTRIES],
    /// Inner value at which the next-higher exponent bucket must be selected
    pub(crate) boundary: f64,
    /// Integer mantissa units per unit of significand: `2^M / (base - 1)`
    pub(crate) step: f64,
    /// `scale[0]`; the inner-space image of magnitude zero
    pub(crate) inner_offset: f64,
    /// `1 - scale[0]`
    pub(crate) inner_span: f64,
    /// `1 / (1 - scale[0])`
    pub(crate) inner_unspan: f64,
    pub(crate) max_value: f64,
    pub(crate) min_value: f64,
}

/// Low `bits` bits set, for `bits <= 16`
#[inline]
const fn low_mask(bits: u32) -> u16 {
    ((1u32 << bits) - 1) as u16
}

impl Format {
    /// Create a format from an explicit bit layout.
    ///
    /// # Arguments
    /// * `total_bits` - total code width, at most 16
    /// * `exponent_base` - 2 or 3
    /// * `exponent_bits` - exponent field width, at most 4
    /// * `min_exponent` - exponent of the all-zero exponent field; must be negative
    /// * `signed` - whether the layout carries a sign bit
    ///
    /// # Errors
    /// Returns a [`ConstructionError`] when the layout is infeasible: width
    /// over 16 bits, unsupported base, no room for a mantissa bit, exponent
    /// field wider than the scale table, or a non-negative minimum exponent.
    pub fn new(
        total_bits: u32,
        exponent_base: u32,
        exponent_bits: u32,
        min_exponent: i32,
        signed: bool,
    ) -> Result<Self, ConstructionError> {
        if total_bits > 16 {
            return Err(ConstructionError::WidthTooLarge { total_bits });
        }
        if exponent_base != 2 && exponent_base != 3 {
            return Err(ConstructionError::UnsupportedBase { base: exponent_base });
        }
        let sign_bit = u32::from(signed);
        if i64::from(total_bits) - i64::from(exponent_bits) - i64::from(sign_bit) < 1 {
            return Err(ConstructionError::MantissaTooNarrow {
                total_bits,
                exponent_bits,
                signed,
            });
        }
        if exponent_bits > 4 {
            return Err(ConstructionError::ExponentTooWide { exponent_bits });
        }
        if min_exponent >= 0 {
            return Err(ConstructionError::MinExponentNotNegative { min_exponent });
        }

        let mantissa_bits = total_bits - exponent_bits - sign_bit;
        let entries = 1usize << exponent_bits;

        let base = f64::from(exponent_base);
        let mut scale = [0.0f64; MAX_SCALE_ENTRIES];
        for (i, entry) in scale.iter_mut().enumerate().take(entries) {
            *entry = base.powi(min_exponent + i as i32);
        }

        let mantissa_mask = low_mask(mantissa_bits);
        let mantissa_steps = f64::from(1u32 << mantissa_bits);
        // Significand spans [1, base), so one mantissa unit is (base-1)/2^M
        // of the scale.
        let step = mantissa_steps / f64::from(exponent_base - 1);
        // Decoded significand at which round-to-nearest would produce
        // mantissa 2^M: the tie itself already belongs to the next bucket.
        let boundary = 1.0 + f64::from(exponent_base - 1) * (mantissa_steps - 0.5) / mantissa_steps;

        let inner_offset = scale[0];
        let inner_span = 1.0 - inner_offset;
        let inner_unspan = 1.0 / inner_span;

        // Decode of the all-ones magnitude code, inlined.
        let top_significand = 1.0 + f64::from(mantissa_mask) / step;
        let max_value = (top_significand * scale[entries - 1] - inner_offset) * inner_unspan;
        let min_value = if signed { -max_value } else { 0.0 };

        Ok(Self {
            params: Params {
                total_bits,
                exponent_base,
                exponent_bits,
                min_exponent,
                signed,
            },
            mantissa_bits,
            total_mask: low_mask(total_bits),
            sign_mask: if signed { 1u16 << (total_bits - 1) } else { 0 },
            mantissa_mask,
            exponent_mask: low_mask(exponent_bits),
            scale,
            boundary,
            step,
            inner_offset,
            inner_span,
            inner_unspan,
            max_value,
            min_value,
        })
    }

    /// Base-2 preset: 4 exponent bits, bias -8.
    ///
    /// The workhorse layout; at 12 bits signed it covers roughly
    /// `[-256, 256]` with a relative precision of about 0.4%.
    ///
    /// # Errors
    /// See [`Format::new`].
    pub fn x4(total_bits: u32, signed: bool) -> Result<Self, ConstructionError> {
        Self::new(total_bits, 2, 4, -8, signed)
    }

    /// Base-3 preset: 3 exponent bits, bias -6.
    ///
    /// Narrower range than [`Format::x4`] but one more mantissa bit at the
    /// same total width.
    ///
    /// # Errors
    /// See [`Format::new`].
    pub fn x3(total_bits: u32, signed: bool) -> Result<Self, ConstructionError> {
        Self::new(total_bits, 3, 3, -6, signed)
    }

    /// Base-3 preset: 2 exponent bits, bias -3.
    ///
    /// For values clustered near `[-1, 1]`; two more mantissa bits than
    /// [`Format::x4`] at the same total width.
    ///
    /// # Errors
    /// See [`Format::new`].
    pub fn x2(total_bits: u32, signed: bool) -> Result<Self, ConstructionError> {
        Self::new(total_bits, 3, 2, -3, signed)
    }

    /// Rebuild a format from persisted parameters.
    ///
    /// # Errors
    /// See [`Format::new`].
    pub fn from_params(params: Params) -> Result<Self, ConstructionError> {
        Self::new(
            params.total_bits,
            params.exponent_base,
            params.exponent_bits,
            params.min_exponent,
            params.signed,
        )
    }

    /// The parameters this format was built from.
    #[inline]
    #[must_use]
    pub fn params(&self) -> Params {
        self.params
    }

    /// Total code width in bits.
    #[inline]
    #[must_use]
    pub fn total_bits(&self) -> u32 {
        self.params.total_bits
    }

    /// Exponent base (2 or 3).
    #[inline]
    #[must_use]
    pub fn exponent_base(&self) -> u32 {
        self.params.exponent_base
    }

    /// Exponent field width in bits.
    #[inline]
    #[must_use]
    pub fn exponent_bits(&self) -> u32 {
        self.params.exponent_bits
    }

    /// Mantissa field width in bits.
    #[inline]
    #[must_use]
    pub fn mantissa_bits(&self) -> u32 {
        self.mantissa_bits
    }

    /// Exponent represented by an all-zero exponent field.
    #[inline]
    #[must_use]
    pub fn min_exponent(&self) -> i32 {
        self.params.min_exponent
    }

    /// Whether the layout carries a sign bit.
    #[inline]
    #[must_use]
    pub fn signed(&self) -> bool {
        self.params.signed
    }

    /// Largest real value representable without saturating.
    #[inline]
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Most negative representable value (`0.0` for unsigned formats).
    #[inline]
    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Clear the sign bit of an encoded code.
    ///
    /// Operates on the sign-magnitude form directly; the result is masked to
    /// the format's width. For unsigned formats this only strips don't-care
    /// high bits.
    #[inline]
    #[must_use]
    pub fn abs(&self, code: u16) -> u16 {
        code & self.total_mask & !self.sign_mask
    }
}
