//! Shared numeric helpers for intersection and shading code.
//!
//! Every "effectively zero" or "effectively equal" comparison in Lumen goes
//! through [`EPSILON`]. Floating values are never compared for exact equality.

use crate::Vector;

/// Tolerance for degenerate and boundary cases.
pub const EPSILON: f64 = 1.0e-5;

/// Solve `a·t² + b·t + c = 0`.
///
/// Returns the two real roots in descending order (larger root first), or
/// `None` when there are no real roots. A tangent ray yields the same root
/// twice. A near-zero `a` is treated as having no roots rather than dividing
/// by it.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a.abs() < EPSILON {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    let r1 = (-b + sqrtd) / (2.0 * a);
    let r2 = (-b - sqrtd) / (2.0 * a);

    Some((r1.max(r2), r1.min(r2)))
}

/// Mirror `v` about the plane with unit normal `n`.
#[inline]
pub fn reflect(v: Vector, n: Vector) -> Vector {
    v - 2.0 * v.dot(n) * n
}

/// Bend unit vector `v` through a boundary with unit normal `n` going from a
/// medium with index `n1` into one with index `n2` (Snell's law).
///
/// `n` must face against `v`. Returns `None` on total internal reflection.
pub fn refract(v: Vector, n: Vector, n1: f64, n2: f64) -> Option<Vector> {
    let eta = n1 / n2;
    let cos_i = -v.dot(n);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }

    Some((eta * v + (eta * cos_i - k.sqrt()) * n).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_descending_roots() {
        // (t - 1)(t - 3) = t² - 4t + 3
        let (larger, smaller) = solve_quadratic(1.0, -4.0, 3.0).unwrap();
        assert!((larger - 3.0).abs() < EPSILON);
        assert!((smaller - 1.0).abs() < EPSILON);

        // Negative leading coefficient still yields descending order
        let (larger, smaller) = solve_quadratic(-1.0, 4.0, -3.0).unwrap();
        assert!(larger > smaller);
        assert!((larger - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_quadratic_no_real_roots() {
        assert_eq!(solve_quadratic(1.0, 0.0, 1.0), None);
    }

    #[test]
    fn test_quadratic_tangent() {
        let (larger, smaller) = solve_quadratic(1.0, -2.0, 1.0).unwrap();
        assert_eq!(larger, smaller);
        assert!((larger - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_quadratic_degenerate_leading_coefficient() {
        assert_eq!(solve_quadratic(0.0, 2.0, 1.0), None);
    }

    #[test]
    fn test_reflect() {
        let v = Vector::new(1.0, -1.0, 0.0);
        let r = reflect(v, Vector::Y);
        assert_eq!(r, Vector::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_refract_straight_through() {
        let v = Vector::new(0.0, 0.0, -1.0);
        let r = refract(v, Vector::Z, 1.0, 1.5).unwrap();
        assert!((r - v).length() < EPSILON);
    }

    #[test]
    fn test_refract_bends_towards_normal() {
        let v = Vector::new(1.0, 0.0, -1.0).normalize();
        let r = refract(v, Vector::Z, 1.0, 1.5).unwrap();

        // Entering a denser medium the ray bends towards -normal
        assert!(r.x < v.x);
        assert!(r.x > 0.0);
        assert!((r.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_total_internal_reflection() {
        let v = Vector::new(1.0, 0.0, -0.2).normalize();
        assert_eq!(refract(v, Vector::Z, 1.5, 1.0), None);
    }
}
