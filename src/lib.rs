//! `picofloat` - Tiny configurable floating-point codecs for telemetry streams
//!
//! Packs a real number into a fixed-width (up to 16-bit) unsigned integer
//! using a sign-magnitude layout with a custom exponent base, and unpacks it
//! back into an approximate real value. Intended for compact serialization
//! of sensor-like numeric streams where full IEEE precision is unnecessary
//! but monotonic, saturating, round-trip-stable behavior is required.
//!
//! # Features
//! - **Configurable layout**: 1-16 total bits, 0-4 exponent bits, base 2 or
//!   base 3 exponents, signed or unsigned
//! - **Total functions**: encode and decode never fail; NaN, infinities and
//!   out-of-range inputs all map to defined codes
//! - **Order-preserving transform**: codes convert to unsigned integers that
//!   sort like the values they represent
//! - **Integer deltas**: the difference between consecutive codes as a small
//!   signed step count, replayable without the original values
//!
//! # Example
//! ```
//! use picofloat::Format;
//!
//! // 12-bit signed, base-2 exponent, bias -8
//! let f = Format::x4(12, true).unwrap();
//!
//! let code = f.encode(1.567);
//! assert_eq!(code, 0x448);
//! assert!((f.decode(code) - 1.564706).abs() < 1e-6);
//!
//! // Deltas between consecutive samples stay small
//! let next = f.encode(1.571);
//! let delta = f.get_integer_delta(code, next);
//! assert_eq!(f.use_integer_delta(code, delta), next);
//! ```
//!
//! # Wire Format
//!
//! A code occupies the low `total_bits` of a `u16`; bits above that are
//! don't-care and ignored by [`Format::decode`]. Within the code, MSB to
//! LSB:
//!
//! | Field | Width | Description |
//! |-------|-------|-------------|
//! | sign | 0 or 1 | Present only for signed formats, always the top bit |
//! | exponent | X (0-4) | Index into the precomputed scale table |
//! | mantissa | M (>= 1) | Significand fraction, `significand = 1 + m / step` |
//!
//! The represented magnitude is `(significand * base^(min_exponent + x) - a) / (1 - a)`
//! where `a = base^min_exponent`. The affine remap by `a` makes the smallest
//! representable magnitude exactly zero without a hidden leading bit.
//!
//! # Presets
//!
//! | Preset | Base | Exponent bits | Bias | Character |
//! |--------|------|---------------|------|-----------|
//! | [`Format::x4`] | 2 | 4 | -8 | Widest range, ~[-256, 256] at 12-bit signed |
//! | [`Format::x3`] | 3 | 3 | -6 | One more mantissa bit, range ~[-9, 9] |
//! | [`Format::x2`] | 3 | 2 | -3 | Two more mantissa bits, range ~[-3, 3] |
//!
//! The configuration is **not** stored in the codes: encoder and decoder
//! must agree on it out-of-band ([`Params`] is the serializable handle for
//! that).
//!
//! # Not IEEE 754
//!
//! There are no subnormals, no infinity or NaN codes, and no implicit
//! leading bit. NaN encodes to the zero code; infinities saturate to the
//! extreme codes.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

mod comparable;
mod decoder;
mod delta;
mod encoder;
mod error;
mod format;

#[cfg(test)]
mod tests;

// Re-export public API
pub use error::ConstructionError;
pub use format::{Format, Params};
