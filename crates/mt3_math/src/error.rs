//! Numeric error types
//!
//! Every degenerate input the math core can see is reported as a `MathError`
//! instead of leaking NaN or infinity into later frames.

use std::fmt;

/// Error type for degenerate numeric input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// Matrix determinant is zero relative to its entries, so it cannot be inverted
    Singular {
        /// The determinant that was found
        determinant: f32,
    },
    /// Homogeneous w became zero during a point transform
    ZeroW,
    /// Vector of zero length was normalized or projected onto
    ZeroLength,
    /// Input contained NaN or infinity, or the result overflowed
    NonFinite,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::Singular { determinant } => {
                write!(f, "Singular matrix (determinant {})", determinant)
            }
            MathError::ZeroW => write!(f, "Homogeneous w is zero after transform"),
            MathError::ZeroLength => write!(f, "Vector has zero length"),
            MathError::NonFinite => write!(f, "Value is not finite"),
        }
    }
}

impl std::error::Error for MathError {}
