use super::Point2;

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. A repeated closing
/// vertex contributes nothing, so sampled closed curves can be passed as-is.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns whether the polygon winds counter-clockwise.
#[must_use]
pub fn is_ccw(points: &[Point2]) -> bool {
    signed_area_2d(points) > 0.0
}

/// Returns the total length of an open polyline.
#[must_use]
pub fn polyline_length(points: &[Point2]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let sq = unit_square();
        assert!((signed_area_2d(&sq) - 1.0).abs() < 1e-12);
        assert!(is_ccw(&sq));
    }

    #[test]
    fn signed_area_cw_square() {
        let mut sq = unit_square();
        sq.reverse();
        assert!((signed_area_2d(&sq) + 1.0).abs() < 1e-12);
        assert!(!is_ccw(&sq));
    }

    #[test]
    fn closing_vertex_does_not_change_area() {
        let mut sq = unit_square();
        sq.push(sq[0]);
        assert!((signed_area_2d(&sq) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn signed_area_degenerate() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(signed_area_2d(&pts).abs() < 1e-12);
    }

    #[test]
    fn polyline_length_of_square_outline() {
        let mut sq = unit_square();
        sq.push(sq[0]);
        assert!((polyline_length(&sq) - 4.0).abs() < 1e-12);
    }
}
