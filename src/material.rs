//! Shading modes and the fixed set of material variants.
//!
//! Materials are created once at scene setup and selected, never recreated,
//! on each rebuild. Their color/specular/shininess fields are refreshed
//! every tick regardless of whether a rebuild happened. An unrecognized
//! shading-mode name resolves to the glossy variant; that fallback is the
//! documented default, not an error.

use bytemuck::{Pod, Zeroable};
use log::debug;

use crate::assets::{CubeMapHandle, TextureHandle};
use crate::color::{Color, WHITE};

/// The available shading modes, one material variant each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadingMode {
    /// Unlit white wireframe.
    Wireframe,
    /// Per-face (flat) shading.
    Flat,
    /// Per-vertex (Gouraud) shading.
    Smooth,
    /// Per-pixel specular (Phong) shading. The fallback mode.
    Glossy,
    /// Glossy with a UV-grid texture map.
    Textured,
    /// Glossy with diffuse and normal maps.
    NormalMapped,
    /// Glossy with a cube-map environment reflection.
    Reflective,
}

impl ShadingMode {
    /// Every mode, in panel order.
    pub const ALL: [ShadingMode; 7] = [
        ShadingMode::Wireframe,
        ShadingMode::Flat,
        ShadingMode::Smooth,
        ShadingMode::Glossy,
        ShadingMode::Textured,
        ShadingMode::NormalMapped,
        ShadingMode::Reflective,
    ];

    /// Total lookup from a shading-mode name. Unrecognized names fall back
    /// to [`ShadingMode::Glossy`].
    pub fn from_name(name: &str) -> ShadingMode {
        match name {
            "wireframe" => ShadingMode::Wireframe,
            "flat" => ShadingMode::Flat,
            "smooth" => ShadingMode::Smooth,
            "glossy" => ShadingMode::Glossy,
            "textured" => ShadingMode::Textured,
            "normal" => ShadingMode::NormalMapped,
            "reflective" => ShadingMode::Reflective,
            other => {
                debug!("unrecognized shading mode '{}', using glossy", other);
                ShadingMode::Glossy
            }
        }
    }

    /// Panel name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            ShadingMode::Wireframe => "wireframe",
            ShadingMode::Flat => "flat",
            ShadingMode::Smooth => "smooth",
            ShadingMode::Glossy => "glossy",
            ShadingMode::Textured => "textured",
            ShadingMode::NormalMapped => "normal",
            ShadingMode::Reflective => "reflective",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One pre-instantiated material. Uniform fields are mutated in place by
/// the synchronizer; the variant itself lives as long as the scene.
#[derive(Debug, Clone)]
pub struct MaterialVariant {
    pub mode: ShadingMode,
    pub color: Color,
    pub specular: Color,
    pub shininess: f32,
    /// Whether the per-vertex color attribute modulates the surface.
    pub vertex_colors: bool,
    pub texture: Option<TextureHandle>,
    pub normal_map: Option<TextureHandle>,
    pub env_map: Option<CubeMapHandle>,
}

impl MaterialVariant {
    fn new(mode: ShadingMode) -> Self {
        Self {
            mode,
            color: WHITE,
            specular: Color::new(0.0, 0.0, 0.0),
            shininess: 30.0,
            vertex_colors: false,
            texture: None,
            normal_map: None,
            env_map: None,
        }
    }

    /// Whether the per-tick diffuse color lands on this variant. The
    /// wireframe stays unlit white and the reflective variant keeps its
    /// fixed white base so the environment map reads cleanly.
    pub fn receives_diffuse(&self) -> bool {
        matches!(
            self.mode,
            ShadingMode::Flat
                | ShadingMode::Smooth
                | ShadingMode::Glossy
                | ShadingMode::Textured
                | ShadingMode::NormalMapped
        )
    }

    /// Whether specular color and shininess land on this variant.
    pub fn receives_specular(&self) -> bool {
        matches!(
            self.mode,
            ShadingMode::Glossy | ShadingMode::Textured | ShadingMode::NormalMapped
        )
    }

    /// GPU-ready uniform block for this variant's current state.
    pub fn to_uniforms(&self) -> MaterialUniforms {
        MaterialUniforms {
            color: self.color.to_vec4(),
            specular: self.specular.to_vec4(),
            shininess: self.shininess,
            vertex_colors: self.vertex_colors as u32,
            textured: self.texture.as_ref().map_or(0, |t| t.is_resolved() as u32),
            _padding: 0,
        }
    }
}

/// GPU-ready material uniforms, laid out for direct upload.
/// Total size: 48 bytes (16-byte aligned).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct MaterialUniforms {
    /// Diffuse color (rgb), a = 1.0.
    pub color: [f32; 4],
    /// Specular color (rgb), a = 1.0.
    pub specular: [f32; 4],
    /// Specular exponent.
    pub shininess: f32,
    /// Whether vertex colors modulate the surface (0 or 1).
    pub vertex_colors: u32,
    /// Whether a texture map is bound and resolved (0 or 1).
    pub textured: u32,
    pub _padding: u32,
}

/// Texture inputs for the variants that use maps. Handles may still be
/// loading; an unresolved handle simply renders untextured.
#[derive(Debug, Clone)]
pub struct MaterialTextures {
    pub uv_grid: TextureHandle,
    pub diffuse_map: TextureHandle,
    pub normal_map: TextureHandle,
    pub env_map: CubeMapHandle,
}

/// The fixed collection of material variants, one per shading mode.
#[derive(Debug, Clone)]
pub struct MaterialSet {
    variants: [MaterialVariant; 7],
    env_map: CubeMapHandle,
}

impl MaterialSet {
    /// Build every variant once. Selection afterwards never allocates.
    pub fn new(textures: MaterialTextures) -> Self {
        let mut variants = ShadingMode::ALL.map(MaterialVariant::new);

        variants[ShadingMode::Textured.index()].texture = Some(textures.uv_grid);
        variants[ShadingMode::NormalMapped.index()].texture = Some(textures.diffuse_map);
        variants[ShadingMode::NormalMapped.index()].normal_map = Some(textures.normal_map);
        variants[ShadingMode::Reflective.index()].env_map = Some(textures.env_map.clone());

        Self {
            variants,
            env_map: textures.env_map,
        }
    }

    /// Look up the variant for a mode.
    pub fn select(&self, mode: ShadingMode) -> &MaterialVariant {
        &self.variants[mode.index()]
    }

    pub fn select_mut(&mut self, mode: ShadingMode) -> &mut MaterialVariant {
        &mut self.variants[mode.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialVariant> {
        self.variants.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut MaterialVariant> {
        self.variants.iter_mut()
    }

    /// The shared reflection cube map, for the background toggle.
    pub fn env_map(&self) -> &CubeMapHandle {
        &self.env_map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{CubeMapHandle, TextureHandle};

    fn textures() -> MaterialTextures {
        MaterialTextures {
            uv_grid: TextureHandle::pending("uv"),
            diffuse_map: TextureHandle::pending("diffuse"),
            normal_map: TextureHandle::pending("normal"),
            env_map: CubeMapHandle::pending("env"),
        }
    }

    #[test]
    fn test_every_name_maps_to_distinct_mode() {
        for mode in ShadingMode::ALL {
            assert_eq!(ShadingMode::from_name(mode.name()), mode);
        }
    }

    #[test]
    fn test_unrecognized_name_falls_back_to_glossy() {
        assert_eq!(ShadingMode::from_name("chrome"), ShadingMode::Glossy);
        assert_eq!(ShadingMode::from_name(""), ShadingMode::Glossy);
        // Idempotent: the fallback's own name maps to itself.
        let fallback = ShadingMode::from_name("nonsense");
        assert_eq!(ShadingMode::from_name(fallback.name()), fallback);
    }

    #[test]
    fn test_selection_returns_matching_variant() {
        let set = MaterialSet::new(textures());
        for mode in ShadingMode::ALL {
            assert_eq!(set.select(mode).mode, mode);
        }
    }

    #[test]
    fn test_map_assignment() {
        let set = MaterialSet::new(textures());
        assert!(set.select(ShadingMode::Textured).texture.is_some());
        assert!(set.select(ShadingMode::NormalMapped).normal_map.is_some());
        assert!(set.select(ShadingMode::Reflective).env_map.is_some());
        assert!(set.select(ShadingMode::Glossy).texture.is_none());
    }

    #[test]
    fn test_diffuse_and_specular_capabilities() {
        let set = MaterialSet::new(textures());
        assert!(!set.select(ShadingMode::Wireframe).receives_diffuse());
        assert!(!set.select(ShadingMode::Reflective).receives_diffuse());
        assert!(set.select(ShadingMode::Flat).receives_diffuse());
        assert!(!set.select(ShadingMode::Flat).receives_specular());
        assert!(set.select(ShadingMode::Glossy).receives_specular());
    }

    #[test]
    fn test_uniforms_size() {
        assert_eq!(std::mem::size_of::<MaterialUniforms>(), 48);
    }

    #[test]
    fn test_unresolved_texture_reads_as_untextured() {
        let set = MaterialSet::new(textures());
        let uniforms = set.select(ShadingMode::Textured).to_uniforms();
        assert_eq!(uniforms.textured, 0);
    }
}
