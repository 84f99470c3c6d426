//! Pinhole camera for ray generation.

use crate::Ray;
use lumen_math::{Point, Vector, EPSILON};

/// Pinhole camera mapping discrete pixel coordinates onto an image plane.
///
/// The image plane is centered `distance_to_plane` along `towards` and is
/// `viewport_width` world units wide. Horizontal and vertical pixel sizes are
/// each `viewport_width / resolution` along their own axis, so pixels are not
/// square when the resolution is not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinholeCamera {
    position: Point,
    right: Vector,
    up: Vector,
    towards: Vector,
    distance_to_plane: f64,
    resolution_x: f64,
    resolution_y: f64,
    viewport_width: f64,
}

impl PinholeCamera {
    /// Create a camera with a 200x200 resolution and a viewport 2 units wide.
    ///
    /// `towards` and `up` need not be normalized. The basis is made
    /// orthonormal with `right = towards × up`. An `up` parallel to
    /// `towards` leaves the basis undefined; see [`has_basis`](Self::has_basis).
    pub fn new(position: Point, towards: Vector, up: Vector, distance_to_plane: f64) -> Self {
        let towards = towards.normalize();
        let side = towards.cross(up);
        if side.length_squared() < EPSILON {
            log::warn!("Camera up {} is parallel to towards {}", up, towards);
        }
        let right = side.normalize();
        let up = right.cross(towards).normalize();

        Self {
            position,
            right,
            up,
            towards,
            distance_to_plane,
            resolution_x: 200.0,
            resolution_y: 200.0,
            viewport_width: 2.0,
        }
    }

    /// Copy of this camera bound to an image resolution and viewport width.
    pub fn with_resolution(mut self, width: u32, height: u32, viewport_width: f64) -> Self {
        self.resolution_x = f64::from(width);
        self.resolution_y = f64::from(height);
        self.viewport_width = viewport_width;
        self
    }

    /// Get the camera position.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn right(&self) -> Vector {
        self.right
    }

    pub fn up(&self) -> Vector {
        self.up
    }

    pub fn towards(&self) -> Vector {
        self.towards
    }

    /// False when the supplied `up` and `towards` could not span a basis.
    pub fn has_basis(&self) -> bool {
        self.right.is_finite() && self.up.is_finite() && self.towards.is_finite()
    }

    /// World-space size of one pixel as (horizontal, vertical).
    pub fn pixel_size(&self) -> (f64, f64) {
        (
            self.viewport_width / self.resolution_x,
            self.viewport_width / self.resolution_y,
        )
    }

    /// Center of the image plane.
    pub fn image_center(&self) -> Point {
        self.position + self.distance_to_plane * self.towards
    }

    /// Map pixel (x, y) onto the image plane. Row 0 is the top of the image.
    pub fn transform(&self, x: u32, y: u32) -> Point {
        self.transform_subpixel(f64::from(x), f64::from(y))
    }

    /// Same as [`transform`](Self::transform) for fractional pixel coordinates.
    pub fn transform_subpixel(&self, x: f64, y: f64) -> Point {
        let (pixel_width, pixel_height) = self.pixel_size();
        let right = self.right * ((x - self.resolution_x / 2.0) * pixel_width);
        let up = self.up * (-(y - self.resolution_y / 2.0) * pixel_height);

        self.image_center() + right + up
    }

    /// Primary ray from the camera position through pixel (x, y).
    pub fn ray_through(&self, x: f64, y: f64) -> Ray {
        Ray::through(self.position, self.transform_subpixel(x, y))
    }
}
