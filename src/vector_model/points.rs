/// coordinate pair a vector starts or ends at
///
/// converts from `(x, y)` tuples and `[x, y]` arrays, so callers of
/// [`Vector::create_vector_by_two_points`](super::Vector::create_vector_by_two_points)
/// can pass plain pairs
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Points {
    pub x: f64,
    pub y: f64,
}

impl Points {
    pub fn new(x: f64, y: f64) -> Self {
        Points { x, y }
    }
}

impl From<(f64, f64)> for Points {
    fn from((x, y): (f64, f64)) -> Self {
        Points { x, y }
    }
}

impl From<[f64; 2]> for Points {
    fn from([x, y]: [f64; 2]) -> Self {
        Points { x, y }
    }
}

#[cfg(test)]
mod test_points {
    use super::*;
    use crate::vector_model::Vector;

    #[test]
    fn test_points_from_pair() {
        assert_eq!(Points::from((1.5, -2.0)), Points::new(1.5, -2.0));
        assert_eq!(Points::from([1.5, -2.0]), Points::new(1.5, -2.0));
        // points keep full precision, only the vector rounds
        assert_eq!(Points::from((0.125, 1.0)).x, 0.125);
    }

    #[test]
    fn test_points_as_vector_ends() {
        let v = Vector::create_vector_by_two_points([1.0, 1.0], (4.0, 5.0));
        assert_eq!(v, Vector::new(3.0, 4.0));
    }
}
