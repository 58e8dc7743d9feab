//! 2d vector develop kit
//!
//! Create vectors directly or from two points
//!
//! Add, subtract, scale, dot, normalize, rotate and measure angles

#[macro_use]
pub mod vector_error;
pub mod vector_model;

pub use vector_error::{VectorError, VectorErrorKind};
pub use vector_model::{Operand, Points, Product, Vector};
