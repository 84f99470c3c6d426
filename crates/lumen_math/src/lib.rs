// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod ray;
mod interval;
mod aabb;
pub mod ops;

pub use ray::Ray;
pub use interval::Interval;
pub use aabb::Aabb;
pub use ops::{reflect, refract, solve_quadratic, EPSILON};

/// A direction in world space.
pub type Vector = DVec3;

/// A position in world space.
///
/// Shares its representation with [`Vector`]; the alias only documents intent.
pub type Point = DVec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_creation() {
        let v = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vector_operations() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vector::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vector::X.cross(Vector::Y), Vector::Z);
        assert_eq!(Vector::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vector::new(3.0, 4.0, 0.0).length_squared(), 25.0);
    }
}
