//! Scene lighting: one ambient term plus one directional light.
//!
//! Both lights are refreshed from the parameter store every tick; their
//! colors are HSL-derived. The ambient light deliberately reuses the
//! material's hue and saturation with its lightness scaled by the ambient
//! coefficient, so ambient fill always matches the body color.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::color::Color;

/// Uniform ambient fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
}

impl Default for AmbientLight {
    fn default() -> Self {
        // 0x333333, the demo's resting ambient level.
        Self {
            color: Color::new(0.2, 0.2, 0.2),
        }
    }
}

impl AmbientLight {
    /// Refresh from the material HSL triple scaled by the ambient
    /// coefficient.
    pub fn set_hsl(&mut self, hue: f32, saturation: f32, lightness: f32, ka: f32) {
        self.color = Color::from_hsl(hue, saturation, lightness * ka);
    }
}

/// A single directional light with a position-style direction vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Light position; the light points from here toward the origin.
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.32, 0.39, 0.7),
            color: Color::new(1.0, 1.0, 1.0),
            intensity: 1.0,
        }
    }
}

impl DirectionalLight {
    /// Refresh position and HSL color from the light parameter set.
    pub fn update(&mut self, position: Vec3, hue: f32, saturation: f32, lightness: f32) {
        self.position = position;
        self.color = Color::from_hsl(hue, saturation, lightness);
    }
}

/// GPU-ready lighting uniforms for both lights.
///
/// This struct is laid out for direct upload to a uniform buffer.
/// Total size: 48 bytes (16-byte aligned).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct LightingUniforms {
    /// Normalized direction from the light position toward the origin
    /// (xyz), w unused.
    pub direction: [f32; 4],
    /// Directional light color (rgb), a = intensity.
    pub color: [f32; 4],
    /// Ambient color (rgb), a = 1.0.
    pub ambient: [f32; 4],
}

/// Evaluate both lights into a single uniform block.
///
/// A zero-length position falls back to straight-down light rather than
/// normalizing a zero vector.
pub fn to_uniforms(ambient: &AmbientLight, light: &DirectionalLight) -> LightingUniforms {
    let toward_origin = -light.position;
    let direction = if toward_origin.length_squared() > 1e-6 {
        toward_origin.normalize()
    } else {
        Vec3::new(0.0, -1.0, 0.0)
    };

    LightingUniforms {
        direction: [direction.x, direction.y, direction.z, 0.0],
        color: [
            light.color.r,
            light.color.g,
            light.color.b,
            light.intensity,
        ],
        ambient: ambient.color.to_vec4(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_scales_lightness() {
        let mut ambient = AmbientLight::default();
        ambient.set_hsl(0.121, 0.73, 0.66, 0.17);
        assert_eq!(ambient.color, Color::from_hsl(0.121, 0.73, 0.66 * 0.17));
    }

    #[test]
    fn test_direction_normalization() {
        let light = DirectionalLight {
            position: Vec3::new(2.0, 0.0, 0.0),
            ..Default::default()
        };
        let uniforms = to_uniforms(&AmbientLight::default(), &light);
        assert!((uniforms.direction[0] + 1.0).abs() < 1e-5);
        assert!(uniforms.direction[1].abs() < 1e-5);
        assert!(uniforms.direction[2].abs() < 1e-5);
    }

    #[test]
    fn test_zero_position_falls_back_to_down() {
        let light = DirectionalLight {
            position: Vec3::ZERO,
            ..Default::default()
        };
        let uniforms = to_uniforms(&AmbientLight::default(), &light);
        assert_eq!(uniforms.direction, [0.0, -1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_uniforms_size() {
        assert_eq!(std::mem::size_of::<LightingUniforms>(), 48);
    }
}
