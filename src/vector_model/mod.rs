mod operand;
mod points;
mod vector;

pub use self::operand::*;
pub use self::points::*;
pub use self::vector::*;

/// decimal places kept by vector components
pub const DECIMAL_PLACES: usize = 2;
/// decimal places kept by angle_between result, in degrees
pub const ANGLE_DECIMAL_PLACES: usize = 0;

/// round to `places` decimal places from the exact binary value, ties to even
///
/// float formatting prints the exact decimal expansion, so no scaling
/// multiply is needed and huge finite values never overflow
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
