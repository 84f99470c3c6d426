//! Intersectable trait, hit records and surfaces.

use std::fmt;

use crate::{Color, Material, Ray, RenderResult};
use lumen_math::{Point, Vector, EPSILON};

/// Record of a ray-shape intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Parameter t where the intersection occurs (always > EPSILON)
    pub t: f64,
    /// Unit surface normal. Outward, unless `is_within` is set
    pub normal: Vector,
    /// The ray started inside the shape and this is the far boundary,
    /// so `normal` is the outward normal negated
    pub is_within: bool,
}

impl Hit {
    /// Hit from outside the shape.
    pub fn outside(t: f64, normal: Vector) -> Self {
        Self {
            t,
            normal,
            is_within: false,
        }
    }

    /// Hit on the far boundary from a ray starting inside the shape.
    /// `outward_normal` is flipped.
    pub fn within(t: f64, outward_normal: Vector) -> Self {
        Self {
            t,
            normal: -outward_normal,
            is_within: true,
        }
    }
}

/// Trait for shapes that can be hit by rays.
pub trait Intersectable: fmt::Debug + Send + Sync {
    /// Nearest intersection strictly in front of the ray origin
    /// (t > [`EPSILON`]), or `Ok(None)` if there is none.
    ///
    /// Shapes that cannot answer must return
    /// [`RenderError::Unsupported`](crate::RenderError::Unsupported)
    /// rather than pretending to miss.
    fn intersect(&self, ray: &Ray) -> RenderResult<Option<Hit>>;
}

/// A shape paired with the material it is shaded with.
pub struct Surface {
    shape: Box<dyn Intersectable>,
    material: Material,
}

impl Surface {
    pub fn new(shape: impl Intersectable + 'static, material: Material) -> Self {
        Self {
            shape: Box::new(shape),
            material,
        }
    }

    /// Intersect the underlying shape, attaching this surface to the hit.
    pub fn intersect(&self, ray: &Ray) -> RenderResult<Option<SurfaceHit<'_>>> {
        Ok(self
            .shape
            .intersect(ray)?
            .filter(|hit| hit.t > EPSILON)
            .map(|hit| SurfaceHit { hit, surface: self }))
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn ka(&self) -> Color {
        self.material.ka
    }

    pub fn kd(&self) -> Color {
        self.material.kd
    }

    pub fn ks(&self) -> Color {
        self.material.ks
    }

    pub fn shininess(&self) -> f64 {
        self.material.shininess
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} with {:?}", self.shape, self.material)
    }
}

/// A [`Hit`] plus the surface that produced it.
#[derive(Clone, Copy)]
pub struct SurfaceHit<'a> {
    pub hit: Hit,
    pub surface: &'a Surface,
}

impl<'a> SurfaceHit<'a> {
    /// World-space point of the hit along `ray`.
    pub fn point(&self, ray: &Ray) -> Point {
        ray.at(self.hit.t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;

    #[test]
    fn test_hit_within_flips_normal() {
        let hit = Hit::within(2.0, Vector::Z);
        assert!(hit.is_within);
        assert_eq!(hit.normal, -Vector::Z);

        let hit = Hit::outside(2.0, Vector::Z);
        assert!(!hit.is_within);
        assert_eq!(hit.normal, Vector::Z);
    }

    #[test]
    fn test_surface_attaches_itself() {
        let surface = Surface::new(
            Sphere::new(Point::ZERO, 1.0),
            Material::default().with_shininess(7.0),
        );
        let ray = Ray::new(Point::new(0.0, 0.0, 5.0), -Vector::Z);

        let surface_hit = surface.intersect(&ray).unwrap().unwrap();
        assert!((surface_hit.hit.t - 4.0).abs() < 1e-9);
        assert_eq!(surface_hit.surface.shininess(), 7.0);
        assert!((surface_hit.point(&ray) - Point::new(0.0, 0.0, 1.0)).length() < 1e-9);
    }
}
