//! vector error type

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorErrorKind {
    /// operand is not a kind the operation accepts, e.g. adding a scalar to a vector
    InvalidOperandKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VectorError {
    kind: VectorErrorKind,
    err: String,
}

impl VectorError {
    pub fn new(kind: VectorErrorKind, err: &str) -> VectorError {
        VectorError {
            kind,
            err: err.to_string(),
        }
    }

    pub fn kind(&self) -> VectorErrorKind {
        self.kind
    }
}

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[VectorError]: {}", self.err)
    }
}

impl Error for VectorError {}

#[macro_export]
macro_rules! vector_err {
    ( $kind:expr, $x:expr ) => {{
        $crate::vector_error::VectorError::new(
            $kind,
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}
