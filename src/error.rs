//! Error type for format construction.
//!
//! Construction is the only fallible operation in this crate: once a
//! [`Format`](crate::Format) exists, `encode`, `decode` and the delta
//! operations are total functions.

use std::fmt;

/// Error returned when a [`Format`](crate::Format) cannot be constructed
/// from the requested bit layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// Total width exceeds the 16-bit container
    WidthTooLarge { total_bits: u32 },
    /// Exponent base is not 2 or 3
    UnsupportedBase { base: u32 },
    /// No room left for at least one mantissa bit
    MantissaTooNarrow {
        total_bits: u32,
        exponent_bits: u32,
        signed: bool,
    },
    /// Exponent field wider than the 16-entry scale table allows (max 4)
    ExponentTooWide { exponent_bits: u32 },
    /// Minimum exponent must be negative for the affine remap to be defined
    MinExponentNotNegative { min_exponent: i32 },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthTooLarge { total_bits } => {
                write!(f, "total width {total_bits} exceeds 16 bits")
            }
            Self::UnsupportedBase { base } => {
                write!(f, "exponent base {base} is not supported (must be 2 or 3)")
            }
            Self::MantissaTooNarrow {
                total_bits,
                exponent_bits,
                signed,
            } => {
                let sign_bit = u32::from(*signed);
                write!(
                    f,
                    "layout leaves no mantissa bits: {total_bits} total - {exponent_bits} exponent - {sign_bit} sign < 1"
                )
            }
            Self::ExponentTooWide { exponent_bits } => {
                write!(f, "exponent field of {exponent_bits} bits exceeds the 4-bit maximum")
            }
            Self::MinExponentNotNegative { min_exponent } => {
                write!(f, "minimum exponent {min_exponent} must be negative")
            }
        }
    }
}

impl std::error::Error for ConstructionError {}
