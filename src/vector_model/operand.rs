use super::*;

/// right hand side of add, subtract, multiply and angle_between
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Vector(Vector),
    Scalar(f64),
}

impl Operand {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Operand::Vector(_) => "vector",
            Operand::Scalar(_) => "scalar",
        }
    }
}

impl From<Vector> for Operand {
    fn from(value: Vector) -> Self {
        Operand::Vector(value)
    }
}

impl From<&Vector> for Operand {
    fn from(value: &Vector) -> Self {
        Operand::Vector(*value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

// may lose precision past 2^53, same as an int to float conversion would
impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Scalar(value as f64)
    }
}

/// result of multiply, dot product for a vector operand, scaled vector for a scalar one
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Product {
    Scalar(f64),
    Vector(Vector),
}

impl Product {
    pub fn scalar(self) -> Option<f64> {
        match self {
            Product::Scalar(v) => Some(v),
            Product::Vector(_) => None,
        }
    }

    pub fn vector(self) -> Option<Vector> {
        match self {
            Product::Vector(v) => Some(v),
            Product::Scalar(_) => None,
        }
    }
}
