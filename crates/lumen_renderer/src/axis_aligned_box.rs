//! Axis-aligned box primitive.

use crate::{
    hittable::{Hit, Intersectable},
    Ray, RenderResult,
};
use lumen_math::{Aabb, Point, EPSILON};

/// A solid box whose faces are parallel to the world axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAlignedBox {
    bounds: Aabb,
}

impl AxisAlignedBox {
    /// Create a box from two opposite corners, in any order.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            bounds: Aabb::from_points(a, b),
        }
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }
}

impl Intersectable for AxisAlignedBox {
    fn intersect(&self, ray: &Ray) -> RenderResult<Option<Hit>> {
        let Some(range) = self.bounds.slab(ray) else {
            return Ok(None);
        };

        let hit = if range.min <= EPSILON {
            let outward_normal = self.bounds.face_normal(ray.at(range.max));
            Hit::within(range.max, outward_normal)
        } else {
            let outward_normal = self.bounds.face_normal(ray.at(range.min));
            Hit::outside(range.min, outward_normal)
        };

        Ok(Some(hit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::{DMat3, Vector};

    fn unit_box() -> AxisAlignedBox {
        AxisAlignedBox::new(Point::splat(-1.0), Point::splat(1.0))
    }

    #[test]
    fn test_box_hit_from_outside() {
        let ray = Ray::new(Point::new(0.0, 0.0, 5.0), Vector::new(0.0, 0.0, -1.0));
        let hit = unit_box().intersect(&ray).unwrap().unwrap();

        assert!((hit.t - 4.0).abs() < 1e-9);
        assert_eq!(hit.normal, Vector::Z);
        assert!(!hit.is_within);
    }

    #[test]
    fn test_box_hit_from_inside() {
        let ray = Ray::new(Point::ZERO, Vector::new(0.0, 0.0, -1.0));
        let hit = unit_box().intersect(&ray).unwrap().unwrap();

        assert!((hit.t - 1.0).abs() < 1e-9);
        assert!(hit.is_within);
        // The far face is z = -1; its outward normal flipped points back at the origin
        assert_eq!(hit.normal, Vector::Z);
        assert!(hit.normal.dot(ray.direction()) < 0.0);
    }

    #[test]
    fn test_box_corners_in_any_order() {
        let flipped = AxisAlignedBox::new(Point::splat(1.0), Point::splat(-1.0));
        assert_eq!(flipped, unit_box());
    }

    #[test]
    fn test_box_miss() {
        let ray = Ray::new(Point::new(0.0, 3.0, 5.0), Vector::new(0.0, 0.0, -1.0));
        assert_eq!(unit_box().intersect(&ray).unwrap(), None);

        let ray = Ray::new(Point::new(0.0, 0.0, 5.0), Vector::new(0.0, 0.0, 1.0));
        assert_eq!(unit_box().intersect(&ray).unwrap(), None);
    }

    #[test]
    fn test_box_oblique_hit_side_face() {
        let ray = Ray::new(Point::new(-5.0, 0.5, 0.0), Vector::new(1.0, 0.0, 0.1));
        let hit = unit_box().intersect(&ray).unwrap().unwrap();

        assert_eq!(hit.normal, -Vector::X);
        assert!((ray.at(hit.t).x + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_box_translation_invariance() {
        let offset = Vector::new(-4.0, 2.5, 10.0);
        let ray = Ray::new(Point::new(0.2, -0.3, 5.0), Vector::new(0.1, 0.05, -1.0));
        let moved_ray = Ray::new(ray.origin() + offset, ray.direction());
        let moved = AxisAlignedBox::new(Point::splat(-1.0) + offset, Point::splat(1.0) + offset);

        let a = unit_box().intersect(&ray).unwrap().unwrap();
        let b = moved.intersect(&moved_ray).unwrap().unwrap();

        assert!((a.t - b.t).abs() < 1e-9);
        assert_eq!(a.normal, b.normal);
        assert_eq!(a.is_within, b.is_within);
    }

    #[test]
    fn test_box_axis_permutation_rotates_normal() {
        // A quarter turn about Y keeps an axis-aligned cube axis-aligned
        let rotation = DMat3::from_rotation_y(std::f64::consts::FRAC_PI_2);
        let ray = Ray::new(Point::new(0.2, 0.1, 5.0), Vector::new(0.0, 0.0, -1.0));
        let rotated_ray = Ray::new(rotation * ray.origin(), rotation * ray.direction());

        let a = unit_box().intersect(&ray).unwrap().unwrap();
        let b = unit_box().intersect(&rotated_ray).unwrap().unwrap();

        assert!((a.t - b.t).abs() < 1e-9);
        assert!((rotation * a.normal - b.normal).length() < 1e-9);
    }
}
