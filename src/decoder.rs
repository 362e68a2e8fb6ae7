//! Decoding: sign-magnitude code back to `f64`.

use crate::format::Format;

/// Tolerance for snapping a decoded magnitude to exactly 1.0.
///
/// The affine remap multiplies by `1 - scale[0]` on encode and divides on
/// decode; with base-3 scale tables the two are not exact inverses and the
/// value 1.0 comes back a few ulps off.
const UNIT_SNAP: f64 = 1e-14;

impl Format {
    /// Decode a code into the real value it represents.
    ///
    /// Total function: never fails and never produces NaN. Bits above the
    /// format's width are don't-care and are masked off before any field
    /// extraction, so decode is invariant to their value.
    ///
    /// # Example
    /// ```
    /// use picofloat::Format;
    ///
    /// let f = Format::x4(12, true).unwrap();
    /// let code = f.encode(-2.5);
    /// assert_eq!(f.decode(code), f.decode(code | 0xF000));
    /// ```
    #[must_use]
    pub fn decode(&self, code: u16) -> f64 {
        let code = code & self.total_mask;

        let exponent = ((u32::from(code) >> self.mantissa_bits) & u32::from(self.exponent_mask))
            as usize;
        let mantissa = code & self.mantissa_mask;

        let significand = 1.0 + f64::from(mantissa) / self.step;
        let inner = significand * self.scale[exponent];

        let mut magnitude = (inner - self.inner_offset) * self.inner_unspan;
        if (magnitude - 1.0).abs() < UNIT_SNAP {
            magnitude = 1.0;
        }

        if code & self.sign_mask != 0 {
            -magnitude
        } else {
            magnitude
        }
    }
}
