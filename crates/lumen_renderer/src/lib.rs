//! Lumen Renderer - CPU Whitted-style ray tracing
//!
//! Casts one primary ray per pixel (or a k×k grid with anti-aliasing) from a
//! pinhole camera and shades hits with ambient + Phong diffuse/specular,
//! shadow rays, and bounded recursive reflection/refraction. Pixels are
//! rendered in parallel on a per-call worker pool.

mod error;
mod hittable;
mod material;
mod sphere;
mod axis_aligned_box;
mod light;
mod camera;
mod logger;
mod scene;
mod renderer;

pub use error::{RenderError, RenderResult};
pub use hittable::{Hit, Intersectable, Surface, SurfaceHit};
pub use material::{Color, Material};
pub use sphere::Sphere;
pub use axis_aligned_box::AxisAlignedBox;
pub use light::{DirectionalLight, Light, PointLight, Spotlight};
pub use camera::PinholeCamera;
pub use logger::{InfoLogger, Logger};
pub use scene::{RenderConfig, Scene};
pub use renderer::{clamp_01, color_to_rgb, ImageBuffer};

/// Re-export common math types from lumen_math
pub use lumen_math::{Point, Ray, Vector, EPSILON};
