//! Scene description and Whitted-style shading.
//!
//! Shading per hit:
//! - Ambient term `Ka ⊙ ambient`
//! - Per unoccluded light, Phong diffuse and specular terms
//! - Optional recursive reflection and refraction up to a depth limit

use std::fmt;

use crate::{Color, Light, PinholeCamera, Ray, RenderResult, Surface, SurfaceHit};
use lumen_math::{reflect, refract};

/// Render settings carried by a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum depth of secondary rays
    pub max_recursion_level: u32,
    /// Samples per pixel along each axis (k gives k×k samples)
    pub anti_aliasing_factor: u32,
    /// Trace mirrored rays off reflective surfaces
    pub reflections: bool,
    /// Trace refracted rays through transparent surfaces
    pub refractions: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_recursion_level: 1,
            anti_aliasing_factor: 1,
            reflections: false,
            refractions: false,
        }
    }
}

/// Everything needed to render an image: camera, surfaces, lights and
/// settings.
///
/// Built once with the `with_*` methods and then only read while rendering.
/// Surfaces and lights keep insertion order, which decides ties between
/// equally close hits.
pub struct Scene {
    pub(crate) name: String,
    pub(crate) camera: Option<PinholeCamera>,
    pub(crate) ambient: Color,
    pub(crate) background: Color,
    pub(crate) lights: Vec<Box<dyn Light>>,
    pub(crate) surfaces: Vec<Surface>,
    pub(crate) config: RenderConfig,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            name: "scene".to_string(),
            camera: None,
            ambient: Color::ONE,
            background: Color::new(0.0, 0.5, 1.0),
            lights: Vec::new(),
            surfaces: Vec::new(),
            config: RenderConfig::default(),
        }
    }
}

impl Scene {
    /// Create an empty scene with a white ambient light and a sky-blue
    /// background.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_camera(mut self, camera: PinholeCamera) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_light(mut self, light: impl Light + 'static) -> Self {
        self.lights.push(Box::new(light));
        self
    }

    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surfaces.push(surface);
        self
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_max_recursion_level(mut self, level: u32) -> Self {
        self.config.max_recursion_level = level;
        self
    }

    pub fn with_anti_aliasing_factor(mut self, factor: u32) -> Self {
        self.config.anti_aliasing_factor = factor;
        self
    }

    pub fn with_reflections(mut self, enabled: bool) -> Self {
        self.config.reflections = enabled;
        self
    }

    pub fn with_refractions(mut self, enabled: bool) -> Self {
        self.config.refractions = enabled;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Nearest surface hit along `ray`.
    ///
    /// Linear scan in insertion order; on equal `t` the earlier surface wins.
    pub fn closest_hit(&self, ray: &Ray) -> RenderResult<Option<SurfaceHit<'_>>> {
        let mut closest: Option<SurfaceHit<'_>> = None;

        for surface in &self.surfaces {
            if let Some(candidate) = surface.intersect(ray)? {
                if closest.map_or(true, |current| candidate.hit.t < current.hit.t) {
                    closest = Some(candidate);
                }
            }
        }

        Ok(closest)
    }

    /// A light is occluded if any surface, including the one being shaded,
    /// blocks the shadow ray.
    fn is_occluded(&self, light: &dyn Light, ray_to_light: &Ray) -> RenderResult<bool> {
        for surface in &self.surfaces {
            if light.is_occluded_by(surface, ray_to_light)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Color seen along `ray`, recursing for secondary rays while
    /// `recursion_level` is below the configured maximum.
    ///
    /// The result is not clamped.
    pub fn shade(&self, ray: &Ray, recursion_level: u32) -> RenderResult<Color> {
        let Some(surface_hit) = self.closest_hit(ray)? else {
            return Ok(self.background);
        };

        let hit = surface_hit.hit;
        let surface = surface_hit.surface;
        let point = surface_hit.point(ray);
        let view = (point - ray.origin()).normalize();

        let mut color = surface.ka() * self.ambient;

        for light in &self.lights {
            let ray_to_light = light.ray_to_light(point)?;
            if self.is_occluded(light.as_ref(), &ray_to_light)? {
                continue;
            }

            let intensity = light.intensity(point, &ray_to_light)?;

            // Neither term is clamped: back-facing lights subtract
            let n_dot_l = hit.normal.dot(ray_to_light.direction());
            color += surface.kd() * n_dot_l * intensity;

            let reflected = reflect(ray_to_light.direction(), hit.normal).normalize();
            let cos_alpha = reflected.dot(view);
            color += surface.ks() * cos_alpha.powf(surface.shininess()) * intensity;
        }

        if recursion_level < self.config.max_recursion_level {
            color += self.shade_secondary(ray, &surface_hit, recursion_level + 1)?;
        }

        Ok(color)
    }

    fn shade_secondary(
        &self,
        ray: &Ray,
        surface_hit: &SurfaceHit<'_>,
        next_level: u32,
    ) -> RenderResult<Color> {
        let hit = surface_hit.hit;
        let material = surface_hit.surface.material();
        let point = surface_hit.point(ray);
        let mut color = Color::ZERO;

        if self.config.reflections && material.is_reflective() {
            let mirrored = Ray::new(point, reflect(ray.direction(), hit.normal));
            color += material.reflection_intensity * self.shade(&mirrored, next_level)?;
        }

        if self.config.refractions && material.is_transparent() {
            let (n1, n2) = if hit.is_within {
                (material.refraction_index, 1.0)
            } else {
                (1.0, material.refraction_index)
            };

            // None on total internal reflection
            if let Some(direction) = refract(ray.direction(), hit.normal, n1, n2) {
                let refracted = Ray::new(point, direction);
                color += material.refraction_intensity * self.shade(&refracted, next_level)?;
            }
        }

        Ok(color)
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scene: {}", self.name)?;
        match &self.camera {
            Some(camera) => writeln!(f, "Camera: {:?}", camera)?,
            None => writeln!(f, "Camera: <none>")?,
        }
        writeln!(f, "Ambient: {}", self.ambient)?;
        writeln!(f, "Background Color: {}", self.background)?;
        writeln!(f, "Max recursion level: {}", self.config.max_recursion_level)?;
        writeln!(f, "Anti aliasing factor: {}", self.config.anti_aliasing_factor)?;
        writeln!(f, "Light sources:")?;
        for light in &self.lights {
            writeln!(f, "  {:?}", light)?;
        }
        writeln!(f, "Surfaces:")?;
        for surface in &self.surfaces {
            writeln!(f, "  {}", surface)?;
        }
        Ok(())
    }
}
