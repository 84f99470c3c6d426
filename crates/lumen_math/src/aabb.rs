use crate::{Interval, Point, Ray, Vector, EPSILON};

/// Axis-aligned box bounded by a min and a max corner.
///
/// The corners are always kept consistent: `min` holds the component-wise
/// minimum and `max` the component-wise maximum of whatever was supplied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Point,
    max: Point,
}

impl Aabb {
    /// Create an AABB from two opposite corner points, in any order.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// The component-wise minimum corner.
    pub fn min(&self) -> Point {
        self.min
    }

    /// The component-wise maximum corner.
    pub fn max(&self) -> Point {
        self.max
    }

    /// Get the extent along a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        Interval::new(self.min[n], self.max[n])
    }

    /// Intersect a ray with the box using the slab method.
    ///
    /// Returns the parameter range `[t_min, t_max]` during which the ray is
    /// inside the box, or `None` if it misses or the box lies entirely behind
    /// the origin. `t_min` at or below [`EPSILON`] means the origin is inside.
    pub fn slab(&self, ray: &Ray) -> Option<Interval> {
        let origin = ray.origin();
        let direction = ray.direction();
        let mut ray_t = Interval::UNIVERSE;

        for axis in 0..3 {
            let slab = self.axis_interval(axis);

            // Parallel to this pair of planes: either always between them or never
            if direction[axis].abs() < EPSILON {
                if !slab.contains(origin[axis]) {
                    return None;
                }
                continue;
            }

            let t0 = (slab.min - origin[axis]) / direction[axis];
            let t1 = (slab.max - origin[axis]) / direction[axis];
            ray_t = ray_t.intersect(&Interval::new(t0.min(t1), t0.max(t1)));

            if ray_t.is_empty() || ray_t.max < EPSILON {
                return None;
            }
        }

        Some(ray_t)
    }

    /// Outward unit normal of the face `p` lies on.
    ///
    /// Faces are tested in a fixed order (Z, then Y, then X; min before max)
    /// so edges and corners resolve deterministically. A point on no face
    /// within tolerance falls back to the nearest face.
    pub fn face_normal(&self, p: Point) -> Vector {
        let mut nearest = (f64::INFINITY, Vector::Z);

        for axis in [2, 1, 0] {
            let mut outward = Vector::ZERO;

            outward[axis] = -1.0;
            let to_min = (p[axis] - self.min[axis]).abs();
            if to_min <= EPSILON {
                return outward;
            }
            if to_min < nearest.0 {
                nearest = (to_min, outward);
            }

            outward[axis] = 1.0;
            let to_max = (p[axis] - self.max[axis]).abs();
            if to_max <= EPSILON {
                return outward;
            }
            if to_max < nearest.0 {
                nearest = (to_max, outward);
            }
        }

        nearest.1
    }
}
