//! Encoding: `f64` to sign-magnitude code.

use crate::format::Format;

impl Format {
    /// Encode a real value into this format's code.
    ///
    /// Total function: every `f64` maps to some code. NaN encodes as the
    /// all-zero code, negative inputs to unsigned formats clamp to zero, and
    /// anything at or beyond [`max_value`](Format::max_value) in magnitude
    /// saturates to the extreme code with a matching sign. Infinities
    /// saturate like any other out-of-range value.
    ///
    /// # Example
    /// ```
    /// use picofloat::Format;
    ///
    /// let f = Format::x4(12, true).unwrap();
    /// assert_eq!(f.encode(f64::NAN), 0);
    /// assert_eq!(f.encode(f64::INFINITY), 0x7FF);
    /// assert_eq!(f.encode(f64::NEG_INFINITY), 0xFFF);
    /// ```
    #[must_use]
    pub fn encode(&self, value: f64) -> u16 {
        if value.is_nan() {
            return 0;
        }

        let negative = value < 0.0;
        if negative && !self.signed() {
            return 0;
        }

        let magnitude = value.abs();
        if magnitude >= self.max_value {
            // u32 arithmetic: mantissa_bits can be 16 when the exponent
            // field is absent, which a u16 shift would reject.
            let saturated = ((u32::from(self.exponent_mask) << self.mantissa_bits)
                | u32::from(self.mantissa_mask)) as u16;
            return if negative {
                self.sign_mask | saturated
            } else {
                saturated
            };
        }

        // Remap onto inner space: the smallest representable magnitude lands
        // exactly on scale[0], so no hidden leading bit is needed at the
        // bottom of the range.
        let inner = magnitude * self.inner_span + self.inner_offset;

        let exponent = self.select_exponent(inner);
        let significand = inner / self.scale[exponent];
        let mantissa = self.quantize(significand);

        let code = (u32::from(mantissa) | ((exponent as u32) << self.mantissa_bits)) as u16;
        if negative {
            self.sign_mask | code
        } else {
            code
        }
    }

    /// Largest exponent index whose bucket `inner` falls into.
    ///
    /// Descending linear scan, at most 15 comparisons. An inner value at or
    /// above `boundary * scale[i-1]` would round up to an out-of-range
    /// mantissa in bucket `i-1`, so the tie itself selects bucket `i`.
    #[inline]
    fn select_exponent(&self, inner: f64) -> usize {
        let mut i = 1usize << self.exponent_bits();
        while i > 1 {
            i -= 1;
            if self.boundary * self.scale[i - 1] <= inner {
                return i;
            }
        }
        0
    }

    /// Round the significand into an integer mantissa.
    ///
    /// Round-to-nearest, ties away from zero. The significand can dip
    /// slightly below 1.0 when the boundary rounds a value up into the next
    /// bucket; the offset term keeps the result non-negative there. The
    /// clamp catches floating-point rounding pushing the result one unit
    /// over the field maximum.
    #[inline]
    fn quantize(&self, significand: f64) -> u16 {
        let units = ((significand - 1.0) * self.step + 0.5).floor() as u16;
        units.min(self.mantissa_mask)
    }
}
