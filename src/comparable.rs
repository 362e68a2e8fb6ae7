//! Order-preserving transform between sign-magnitude codes and plain
//! unsigned integers.
//!
//! Sign-magnitude codes do not sort numerically: the sign bit puts negative
//! values above positive ones, and negative magnitudes sort backwards. The
//! comparable form fixes both with two bit tricks, giving an unsigned
//! integer whose ordinary `<` matches the ordering of the decoded values.
//! It exists only transiently for delta arithmetic and is not meant to be
//! stored.
//!
//! Everything here is defined-overflow unsigned arithmetic and explicit
//! masks; no signed-representation tricks.

use crate::format::Format;

impl Format {
    /// Map a code to its order-preserving unsigned form.
    ///
    /// Non-negative codes (sign bit clear, `+0` included) move to the upper
    /// half of the range with their order intact; negative codes are
    /// complemented, which reverses magnitude order and places `-0` one step
    /// below `+0`. For unsigned formats this is the identity on the masked
    /// code.
    #[inline]
    #[must_use]
    pub fn to_comparable(&self, code: u16) -> u16 {
        let code = code & self.total_mask;
        if code & self.sign_mask == 0 {
            self.sign_mask | code
        } else {
            !code & self.total_mask
        }
    }

    /// Inverse of [`to_comparable`](Format::to_comparable).
    #[inline]
    #[must_use]
    pub fn from_comparable(&self, comparable: u16) -> u16 {
        let comparable = comparable & self.total_mask;
        if comparable & self.sign_mask == self.sign_mask {
            comparable & !self.sign_mask
        } else {
            !comparable & self.total_mask
        }
    }
}
