//! Integer deltas between encoded codes.
//!
//! A delta is the signed number of representable steps between two codes in
//! comparable space. Logging deltas instead of full codes lets slow-moving
//! telemetry fit in single-byte integers: consecutive sensor samples rarely
//! move more than a handful of steps.
//!
//! Replaying a delta does not need the original real values, only the
//! previous code, so a stream can be reconstructed code by code.

use crate::format::Format;

impl Format {
    /// Number of representable steps from `last` to `code`.
    ///
    /// Exact for every supported width: comparable values fit in 16 bits, so
    /// their difference always fits an `i32`.
    ///
    /// # Example
    /// ```
    /// use picofloat::Format;
    ///
    /// let f = Format::x4(12, true).unwrap();
    /// let a = f.encode(0.066);
    /// let b = f.encode(0.123);
    /// assert_eq!(f.get_integer_delta(a, b), 114);
    /// ```
    #[inline]
    #[must_use]
    pub fn get_integer_delta(&self, last: u16, code: u16) -> i32 {
        i32::from(self.to_comparable(code)) - i32::from(self.to_comparable(last))
    }

    /// Apply a step count to `last`, reproducing the code it pointed at.
    ///
    /// Arithmetic that runs off either end of the comparable range saturates
    /// to the format's extreme codes instead of wrapping. A zero delta
    /// returns `last` bit-identically, unused high bits included, so
    /// repeated zero-deltas cannot drift a code with an unusual don't-care
    /// pattern.
    #[inline]
    #[must_use]
    pub fn use_integer_delta(&self, last: u16, delta: i32) -> u16 {
        if delta == 0 {
            return last;
        }
        let target = i64::from(self.to_comparable(last)) + i64::from(delta);
        let clamped = target.clamp(0, i64::from(self.total_mask)) as u16;
        self.from_comparable(clamped)
    }
}
