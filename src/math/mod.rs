pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Curvature at or below this value is treated as an inflection point:
/// the radius of curvature is infinite and the curvature center is undefined.
pub const CURVATURE_EPSILON: f64 = 1e-10;

/// Returns the z-component of the cross product of two planar vectors.
///
/// Positive when `b` lies counter-clockwise of `a`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Rotates a planar vector by +90 degrees (counter-clockwise).
#[must_use]
pub fn rotate_ccw(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_axes() {
        assert!((cross_2d(&Vector2::x(), &Vector2::y()) - 1.0).abs() < TOLERANCE);
        assert!((cross_2d(&Vector2::y(), &Vector2::x()) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn cross_of_parallel_is_zero() {
        let a = Vector2::new(2.0, 3.0);
        assert!(cross_2d(&a, &(a * 4.0)).abs() < TOLERANCE);
    }

    #[test]
    fn rotate_ccw_quarter_turn() {
        let r = rotate_ccw(&Vector2::new(1.0, 0.0));
        assert!((r - Vector2::new(0.0, 1.0)).norm() < TOLERANCE);
        let r = rotate_ccw(&Vector2::new(0.6, 0.8));
        assert!(r.dot(&Vector2::new(0.6, 0.8)).abs() < TOLERANCE);
    }
}
