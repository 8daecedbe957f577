//! Cubic Bezier control points from track endpoints and tangents.
//!
//! Given the two endpoints of a track and the directions at each of them, the
//! handles are placed along those directions at [`BEZIER_HANDLE_SCALE`] of the
//! endpoint distance:
//!
//! ```text
//! d    = |pos2 - pos1|
//! han1 = pos1 + dir1 · (d·s / |dir1|)
//! han2 = pos2 - dir2 · (d·s / |dir2|)
//! ```
//!
//! A zero direction stays zero, so the handle collapses onto its endpoint.
use crate::constants::{Point3, BEZIER_HANDLE_SCALE};

/// Rescale `v` to `length`, keeping its direction. Zero vectors stay zero.
pub fn with_length(v: &Point3, length: f64) -> Point3 {
    let norm = v.norm();
    if norm == 0.0 {
        Point3::zeros()
    } else {
        v * (length / norm)
    }
}

/// Inner handles `(han1, han2)` of the cubic joining `pos1` to `pos2`.
///
/// Arguments
/// -----------------
/// * `pos1`, `dir1` – First endpoint and the track direction there.
/// * `pos2`, `dir2` – Second endpoint and the track direction there.
///
/// Return
/// ----------
/// * The two inner control points, using [`BEZIER_HANDLE_SCALE`].
pub fn control_handles(
    pos1: &Point3,
    dir1: &Point3,
    pos2: &Point3,
    dir2: &Point3,
) -> (Point3, Point3) {
    let handle_length = (pos2 - pos1).norm() * BEZIER_HANDLE_SCALE;

    let han1 = pos1 + with_length(dir1, handle_length);
    let han2 = pos2 - with_length(dir2, handle_length);
    (han1, han2)
}

/// Point of the cubic Bezier `p0, p1, p2, p3` at parameter `t`.
pub fn cubic_point(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3, t: f64) -> Point3 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

#[cfg(test)]
mod bezier_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_control_handles_straight_track() {
        let (han1, han2) = control_handles(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(4.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
        );
        assert_relative_eq!(han1, Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(han2, Point3::new(3.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_control_handles_ignore_direction_magnitude() {
        let (han1, han2) = control_handles(
            &Point3::new(1.0, 1.0, 1.0),
            &Point3::new(0.0, 0.0, 25.0),
            &Point3::new(1.0, 9.0, 1.0),
            &Point3::new(0.0, -0.5, 0.0),
        );
        // d = 8, handle length = 2
        assert_relative_eq!(han1, Point3::new(1.0, 1.0, 3.0), epsilon = 1e-12);
        assert_relative_eq!(han2, Point3::new(1.0, 11.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_direction_collapses_handle() {
        let pos1 = Point3::new(2.0, -1.0, 0.5);
        let pos2 = Point3::new(5.0, 3.0, 0.5);
        let (han1, han2) = control_handles(&pos1, &Point3::zeros(), &pos2, &Point3::zeros());
        assert_eq!(han1, pos1);
        assert_eq!(han2, pos2);
    }

    #[test]
    fn test_coincident_endpoints() {
        let pos = Point3::new(1.0, 2.0, 3.0);
        let (han1, han2) =
            control_handles(&pos, &Point3::new(1.0, 0.0, 0.0), &pos, &Point3::new(0.0, 1.0, 0.0));
        assert_eq!(han1, pos);
        assert_eq!(han2, pos);
    }

    #[test]
    fn test_cubic_point_endpoints_and_midpoint() {
        let p0 = Point3::new(0.0, 0.0, 0.0);
        let p1 = Point3::new(1.0, 0.0, 0.0);
        let p2 = Point3::new(3.0, 0.0, 0.0);
        let p3 = Point3::new(4.0, 0.0, 0.0);
        assert_eq!(cubic_point(&p0, &p1, &p2, &p3, 0.0), p0);
        assert_eq!(cubic_point(&p0, &p1, &p2, &p3, 1.0), p3);
        assert_relative_eq!(
            cubic_point(&p0, &p1, &p2, &p3, 0.5),
            Point3::new(2.0, 0.0, 0.0),
            epsilon = 1e-12
        );
    }
}
