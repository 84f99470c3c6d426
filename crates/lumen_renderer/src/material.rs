//! Phong material coefficients.

use lumen_math::DVec3;

/// Color type alias (RGB values typically 0-1, unclamped during shading)
pub type Color = DVec3;

/// Surface material for the Phong model plus Whitted-style secondary rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient coefficient, multiplied component-wise by the scene ambient
    pub ka: Color,
    /// Diffuse coefficient
    pub kd: Color,
    /// Specular coefficient
    pub ks: Color,
    /// Specular exponent
    pub shininess: f64,
    /// Weight of the reflected ray's color (0 = no reflection)
    pub reflection_intensity: f64,
    /// Weight of the refracted ray's color (0 = opaque)
    pub refraction_intensity: f64,
    /// Index of refraction of the material's interior
    pub refraction_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ka: Color::splat(0.1),
            kd: Color::splat(0.7),
            ks: Color::splat(0.7),
            shininess: 10.0,
            reflection_intensity: 0.0,
            refraction_intensity: 0.0,
            refraction_index: 1.5,
        }
    }
}

impl Material {
    /// Create a material whose ambient and diffuse terms follow `color`.
    pub fn new(color: Color) -> Self {
        Self {
            ka: color * 0.1,
            kd: color,
            ..Default::default()
        }
    }

    pub fn with_ambient(mut self, ka: Color) -> Self {
        self.ka = ka;
        self
    }

    pub fn with_diffuse(mut self, kd: Color) -> Self {
        self.kd = kd;
        self
    }

    pub fn with_specular(mut self, ks: Color) -> Self {
        self.ks = ks;
        self
    }

    pub fn with_shininess(mut self, shininess: f64) -> Self {
        self.shininess = shininess;
        self
    }

    /// Set how much of the mirrored ray's color is added.
    pub fn with_reflection(mut self, intensity: f64) -> Self {
        self.reflection_intensity = intensity;
        self
    }

    /// Make the material transparent with the given weight and index.
    pub fn with_refraction(mut self, intensity: f64, index: f64) -> Self {
        self.refraction_intensity = intensity;
        self.refraction_index = index;
        self
    }

    pub fn is_reflective(&self) -> bool {
        self.reflection_intensity > 0.0
    }

    pub fn is_transparent(&self) -> bool {
        self.refraction_intensity > 0.0
    }
}
