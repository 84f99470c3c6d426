//! Light sources.
//!
//! A light answers three questions for a surface point: which way is the
//! light ([`Light::ray_to_light`]), how bright is it there
//! ([`Light::intensity`]), and does a given surface block it
//! ([`Light::is_occluded_by`]).

use std::fmt;

use crate::{Color, Ray, RenderResult, Surface};
use lumen_math::{Point, Vector, EPSILON};

/// Trait for light sources.
pub trait Light: fmt::Debug + Send + Sync {
    /// Ray from `point` toward the light.
    fn ray_to_light(&self, point: Point) -> RenderResult<Ray>;

    /// Light intensity (RGB) arriving at `point` along `ray_to_light`.
    fn intensity(&self, point: Point, ray_to_light: &Ray) -> RenderResult<Color>;

    /// Whether `surface` blocks `ray_to_light` before it reaches the light.
    fn is_occluded_by(&self, surface: &Surface, ray_to_light: &Ray) -> RenderResult<bool>;
}

/// An omnidirectional light at a position, attenuated with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    position: Point,
    intensity: Color,
    /// Quadratic, linear and constant attenuation
    kq: f64,
    kl: f64,
    kc: f64,
}

impl PointLight {
    pub fn new(position: Point, intensity: Color) -> Self {
        Self {
            position,
            intensity,
            kq: 0.01,
            kl: 0.1,
            kc: 1.0,
        }
    }

    /// Set the attenuation `1 / (kc + kl·d + kq·d²)`.
    pub fn with_decay(mut self, kq: f64, kl: f64, kc: f64) -> Self {
        self.kq = kq;
        self.kl = kl;
        self.kc = kc;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

impl Light for PointLight {
    fn ray_to_light(&self, point: Point) -> RenderResult<Ray> {
        Ok(Ray::through(point, self.position))
    }

    fn intensity(&self, point: Point, _ray_to_light: &Ray) -> RenderResult<Color> {
        let d = point.distance(self.position);
        Ok(self.intensity / (self.kc + self.kl * d + self.kq * d * d))
    }

    fn is_occluded_by(&self, surface: &Surface, ray_to_light: &Ray) -> RenderResult<bool> {
        let distance = ray_to_light.origin().distance(self.position);
        Ok(surface
            .intersect(ray_to_light)?
            .is_some_and(|surface_hit| surface_hit.hit.t < distance))
    }
}

/// A point light that only shines into the half-space around `direction`,
/// falling off with the cosine to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spotlight {
    light: PointLight,
    direction: Vector,
}

impl Spotlight {
    pub fn new(position: Point, direction: Vector, intensity: Color) -> Self {
        Self {
            light: PointLight::new(position, intensity),
            direction: direction.normalize(),
        }
    }

    pub fn with_decay(mut self, kq: f64, kl: f64, kc: f64) -> Self {
        self.light = self.light.with_decay(kq, kl, kc);
        self
    }

    /// Cosine between the spot direction and the light-to-point direction.
    fn cos_to_axis(&self, ray_to_light: &Ray) -> f64 {
        (-ray_to_light.direction()).dot(self.direction)
    }
}

impl Light for Spotlight {
    fn ray_to_light(&self, point: Point) -> RenderResult<Ray> {
        self.light.ray_to_light(point)
    }

    fn intensity(&self, point: Point, ray_to_light: &Ray) -> RenderResult<Color> {
        let cos = self.cos_to_axis(ray_to_light);
        if cos < EPSILON {
            return Ok(Color::ZERO);
        }
        Ok(self.light.intensity(point, ray_to_light)? * cos)
    }

    fn is_occluded_by(&self, surface: &Surface, ray_to_light: &Ray) -> RenderResult<bool> {
        // Points outside the cone are always in shadow
        if self.cos_to_axis(ray_to_light) < EPSILON {
            return Ok(true);
        }
        self.light.is_occluded_by(surface, ray_to_light)
    }
}

/// A light infinitely far away shining along `direction` with constant
/// intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    direction: Vector,
    intensity: Color,
}

impl DirectionalLight {
    pub fn new(direction: Vector, intensity: Color) -> Self {
        Self {
            direction: direction.normalize(),
            intensity,
        }
    }
}

impl Light for DirectionalLight {
    fn ray_to_light(&self, point: Point) -> RenderResult<Ray> {
        Ok(Ray::new(point, -self.direction))
    }

    fn intensity(&self, _point: Point, _ray_to_light: &Ray) -> RenderResult<Color> {
        Ok(self.intensity)
    }

    fn is_occluded_by(&self, surface: &Surface, ray_to_light: &Ray) -> RenderResult<bool> {
        Ok(surface.intersect(ray_to_light)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere};

    fn blocker_at(center: Point) -> Surface {
        Surface::new(Sphere::new(center, 0.5), Material::default())
    }

    #[test]
    fn test_point_light_ray_and_decay() {
        let light = PointLight::new(Point::new(0.0, 4.0, 0.0), Color::ONE).with_decay(0.0, 0.0, 1.0);
        let ray = light.ray_to_light(Point::ZERO).unwrap();

        assert_eq!(ray.direction(), Vector::Y);
        assert_eq!(light.intensity(Point::ZERO, &ray).unwrap(), Color::ONE);

        let light = light.with_decay(0.0, 1.0, 0.0);
        let dimmed = light.intensity(Point::ZERO, &ray).unwrap();
        assert!((dimmed - Color::splat(0.25)).length() < 1e-12);
    }

    #[test]
    fn test_point_light_occlusion_stops_at_light() {
        let light = PointLight::new(Point::new(0.0, 4.0, 0.0), Color::ONE);
        let ray = light.ray_to_light(Point::ZERO).unwrap();

        assert!(light.is_occluded_by(&blocker_at(Point::new(0.0, 2.0, 0.0)), &ray).unwrap());
        // Behind the light
        assert!(!light.is_occluded_by(&blocker_at(Point::new(0.0, 6.0, 0.0)), &ray).unwrap());
        // Off to the side
        assert!(!light.is_occluded_by(&blocker_at(Point::new(3.0, 2.0, 0.0)), &ray).unwrap());
    }

    #[test]
    fn test_spotlight_cone() {
        let spot = Spotlight::new(Point::new(0.0, 4.0, 0.0), -Vector::Y, Color::ONE)
            .with_decay(0.0, 0.0, 1.0);

        // Straight below: full intensity
        let below = spot.ray_to_light(Point::ZERO).unwrap();
        assert!((spot.intensity(Point::ZERO, &below).unwrap() - Color::ONE).length() < 1e-12);

        // Above the spot: outside the cone
        let above_point = Point::new(0.0, 8.0, 0.0);
        let above = spot.ray_to_light(above_point).unwrap();
        assert_eq!(spot.intensity(above_point, &above).unwrap(), Color::ZERO);
        assert!(spot
            .is_occluded_by(&blocker_at(Point::new(50.0, 0.0, 0.0)), &above)
            .unwrap());

        // Inside the cone and nothing in the way
        assert!(!spot
            .is_occluded_by(&blocker_at(Point::new(50.0, 0.0, 0.0)), &below)
            .unwrap());
    }

    #[test]
    fn test_spotlight_falloff_follows_cosine() {
        let spot = Spotlight::new(Point::new(0.0, 4.0, 0.0), -Vector::Y, Color::ONE)
            .with_decay(0.0, 0.0, 1.0);
        let point = Point::new(4.0, 0.0, 0.0);
        let ray = spot.ray_to_light(point).unwrap();

        let expected = std::f64::consts::FRAC_1_SQRT_2;
        assert!((spot.intensity(point, &ray).unwrap().x - expected).abs() < 1e-9);
    }

    #[test]
    fn test_directional_light() {
        let light = DirectionalLight::new(Vector::new(0.0, -2.0, 0.0), Color::splat(0.5));
        let ray = light.ray_to_light(Point::ZERO).unwrap();

        assert_eq!(ray.direction(), Vector::Y);
        assert_eq!(light.intensity(Point::ZERO, &ray).unwrap(), Color::splat(0.5));
        assert!(light.is_occluded_by(&blocker_at(Point::new(0.0, 100.0, 0.0)), &ray).unwrap());
        assert!(!light.is_occluded_by(&blocker_at(Point::new(0.0, -3.0, 0.0)), &ray).unwrap());
    }
}
