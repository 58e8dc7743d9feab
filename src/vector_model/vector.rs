use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Sub};

use tracing::{debug, trace};

use super::*;
use crate::vector_error::{VectorError, VectorErrorKind};

/// mathmatic 2d vector
///
/// components are rounded to [`DECIMAL_PLACES`] when the vector is built,
/// every operation returning a vector builds a new one
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    x: f64,
    y: f64,
}

/// reference direction measured by [`Vector::get_angle`]
pub const VERTICAL: Vector = Vector { x: 0.0, y: 1.0 };

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Vector {
            x: round_to(x, DECIMAL_PLACES),
            y: round_to(y, DECIMAL_PLACES),
        }
    }

    /// vector pointing from `start` to `end`
    pub fn create_vector_by_two_points<S, E>(start: S, end: E) -> Self
    where
        S: Into<Points>,
        E: Into<Points>,
    {
        let start = start.into();
        let end = end.into();
        Vector::new(end.x - start.x, end.y - start.y)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// component-wise sum, only vector operand accepted
    pub fn add(self, rhs: impl Into<Operand>) -> Result<Vector, VectorError> {
        match rhs.into() {
            Operand::Vector(other) => Ok(self + other),
            operand => Err(self.reject("add", operand)),
        }
    }

    /// component-wise difference, only vector operand accepted
    pub fn subtract(self, rhs: impl Into<Operand>) -> Result<Vector, VectorError> {
        match rhs.into() {
            Operand::Vector(other) => Ok(self - other),
            operand => Err(self.reject("subtract", operand)),
        }
    }

    /// dot product for a vector operand, scaled vector for a scalar operand
    pub fn multiply(self, rhs: impl Into<Operand>) -> Result<Product, VectorError> {
        Ok(match rhs.into() {
            Operand::Vector(other) => Product::Scalar(self.dot(other)),
            Operand::Scalar(factor) => Product::Vector(self.scale(factor)),
        })
    }

    /// dot product, not rounded
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn scale(self, factor: f64) -> Vector {
        Vector::new(self.x * factor, self.y * factor)
    }

    /// euclidean norm, not rounded
    pub fn get_length(self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    /// unit vector of same direction, zero vector stays zero
    pub fn get_normalized(self) -> Vector {
        let length = self.get_length();
        if length == 0.0 {
            trace!(vector = %self, "normalize zero length vector");
            return Vector::new(0.0, 0.0);
        }
        Vector::new(self.x / length, self.y / length)
    }

    /// angle to [`VERTICAL`] in degrees, always integer valued
    pub fn get_angle(self) -> f64 {
        round_to(self.angle_to(VERTICAL), DECIMAL_PLACES)
    }

    /// rotate by `degrees`, counterclockwise in a y-up frame
    pub fn rotate(self, degrees: f64) -> Vector {
        let (sin_theta, cos_theta) = degrees.to_radians().sin_cos();
        Vector::new(
            self.x * cos_theta - self.y * sin_theta,
            self.x * sin_theta + self.y * cos_theta,
        )
    }

    /// unsigned angle in degrees, rounded to [`ANGLE_DECIMAL_PLACES`]
    ///
    /// 0.0 if either vector has zero length
    pub fn angle_between(self, rhs: impl Into<Operand>) -> Result<f64, VectorError> {
        match rhs.into() {
            Operand::Vector(other) => Ok(self.angle_to(other)),
            operand => Err(self.reject("angle_between", operand)),
        }
    }

    fn angle_to(self, other: Vector) -> f64 {
        let length_self = self.get_length();
        let length_other = other.get_length();
        if length_self == 0.0 || length_other == 0.0 {
            trace!(vector = %self, other = %other, "angle with zero length vector");
            return 0.0;
        }
        // parallel vectors may drift just past 1.0
        let cos_angle = (self.dot(other) / (length_self * length_other)).clamp(-1.0, 1.0);
        round_to(cos_angle.acos().to_degrees(), ANGLE_DECIMAL_PLACES)
    }

    fn reject(self, operation: &str, operand: Operand) -> VectorError {
        debug!(vector = %self, ?operand, operation, "unsupported operand kind");
        vector_err!(
            VectorErrorKind::InvalidOperandKind,
            &format!(
                "{} does not support {} operand",
                operation,
                operand.kind_name()
            )
        )
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from(value: (f64, f64)) -> Self {
        Vector::new(value.0, value.1)
    }
}

impl From<Points> for Vector {
    fn from(value: Points) -> Self {
        Vector::new(value.x, value.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vector {
    type Output = f64;

    fn mul(self, rhs: Vector) -> f64 {
        self.dot(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}
