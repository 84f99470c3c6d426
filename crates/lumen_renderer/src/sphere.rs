//! Sphere primitive for ray tracing.

use crate::{
    hittable::{Hit, Intersectable},
    Ray, RenderResult,
};
use lumen_math::{solve_quadratic, Point, EPSILON};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray) -> RenderResult<Option<Hit>> {
        // Direction is unit length, so the quadratic's leading term is 1
        let oc = ray.origin() - self.center;
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let Some((far, near)) = solve_quadratic(1.0, b, c) else {
            return Ok(None);
        };

        let hit = if near > EPSILON {
            let outward_normal = (ray.at(near) - self.center).normalize();
            Hit::outside(near, outward_normal)
        } else if far > EPSILON {
            // Origin is inside the sphere; report the far side
            let outward_normal = (ray.at(far) - self.center).normalize();
            Hit::within(far, outward_normal)
        } else {
            return Ok(None);
        };

        Ok(Some(hit))
    }
}
