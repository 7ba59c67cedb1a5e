//! The control panel's parameter schema.
//!
//! One definition per control, with the default, range/step or option list,
//! and panel group an external editor needs to lay the panel out. The
//! synchronizer references parameters by the keys defined here; every key
//! it reads must be registered by [`default_store`].

use crate::material::ShadingMode;
use crate::params::{ParamSpec, ParameterStore};

/// Parameter keys, shared between the panel schema and the synchronizer.
pub mod keys {
    pub const SHININESS: &str = "shininess";
    pub const DIFFUSE_STRENGTH: &str = "kd";
    pub const SPECULAR_STRENGTH: &str = "ks";
    pub const AMBIENT_STRENGTH: &str = "ka";
    pub const METALLIC: &str = "metallic";

    pub const HUE: &str = "hue";
    pub const SATURATION: &str = "saturation";
    pub const LIGHTNESS: &str = "lightness";
    pub const VERTEX_COLORS: &str = "vertex_colors";

    pub const LIGHT_HUE: &str = "light_hue";
    pub const LIGHT_SATURATION: &str = "light_saturation";
    pub const LIGHT_LIGHTNESS: &str = "light_lightness";
    pub const LIGHT_X: &str = "light_x";
    pub const LIGHT_Y: &str = "light_y";
    pub const LIGHT_Z: &str = "light_z";

    pub const TESSELLATION: &str = "tessellation";
    pub const LID: &str = "lid";
    pub const BODY: &str = "body";
    pub const BOTTOM: &str = "bottom";
    pub const FIT_LID: &str = "fit_lid";
    pub const ORIGINAL_SCALE: &str = "original_scale";

    pub const SHADING: &str = "shading";
}

/// Tessellation levels offered by the panel dropdown.
pub const TESSELLATION_LEVELS: [&str; 12] = [
    "2", "3", "4", "5", "6", "8", "10", "15", "20", "30", "40", "50",
];

/// Build the full parameter set with the demo's defaults.
pub fn default_store() -> ParameterStore {
    let shading_names: Vec<&str> = ShadingMode::ALL.iter().map(|m| m.name()).collect();

    ParameterStore::new(vec![
        ParamSpec::float(keys::SHININESS, 40.0)
            .with_range(1.0, 400.0, 1.0)
            .with_group("Material control"),
        ParamSpec::float(keys::DIFFUSE_STRENGTH, 0.51)
            .with_range(0.0, 1.0, 0.025)
            .with_group("Material control"),
        ParamSpec::float(keys::SPECULAR_STRENGTH, 0.2)
            .with_range(0.0, 1.0, 0.025)
            .with_group("Material control"),
        ParamSpec::boolean(keys::METALLIC, true).with_group("Material control"),
        ParamSpec::float(keys::HUE, 0.121)
            .with_range(0.0, 1.0, 0.025)
            .with_group("Material color"),
        ParamSpec::float(keys::SATURATION, 0.73)
            .with_range(0.0, 1.0, 0.025)
            .with_group("Material color"),
        ParamSpec::float(keys::LIGHTNESS, 0.66)
            .with_range(0.0, 1.0, 0.025)
            .with_group("Material color"),
        ParamSpec::boolean(keys::VERTEX_COLORS, false).with_group("Material color"),
        ParamSpec::float(keys::LIGHT_HUE, 0.04)
            .with_range(0.0, 1.0, 0.025)
            .with_group("Lighting"),
        // Non-zero so fractions show.
        ParamSpec::float(keys::LIGHT_SATURATION, 0.01)
            .with_range(0.0, 1.0, 0.025)
            .with_group("Lighting"),
        ParamSpec::float(keys::LIGHT_LIGHTNESS, 1.0)
            .with_range(0.0, 1.0, 0.025)
            .with_group("Lighting"),
        ParamSpec::float(keys::AMBIENT_STRENGTH, 0.17)
            .with_range(0.0, 1.0, 0.025)
            .with_group("Lighting"),
        ParamSpec::float(keys::LIGHT_X, 0.32)
            .with_range(-1.0, 1.0, 0.025)
            .with_group("Light direction"),
        ParamSpec::float(keys::LIGHT_Y, 0.39)
            .with_range(-1.0, 1.0, 0.025)
            .with_group("Light direction"),
        ParamSpec::float(keys::LIGHT_Z, 0.7)
            .with_range(-1.0, 1.0, 0.025)
            .with_group("Light direction"),
        ParamSpec::choice(keys::TESSELLATION, "15", &TESSELLATION_LEVELS)
            .with_group("Tessellation control"),
        ParamSpec::boolean(keys::LID, true).with_group("Tessellation control"),
        ParamSpec::boolean(keys::BODY, true).with_group("Tessellation control"),
        ParamSpec::boolean(keys::BOTTOM, true).with_group("Tessellation control"),
        ParamSpec::boolean(keys::FIT_LID, false).with_group("Tessellation control"),
        ParamSpec::boolean(keys::ORIGINAL_SCALE, false).with_group("Tessellation control"),
        ParamSpec::choice(keys::SHADING, "glossy", &shading_names).with_group("Shading"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    #[test]
    fn test_defaults_match_the_demo() {
        let store = default_store();
        assert_eq!(store.float(keys::SHININESS), 40.0);
        assert_eq!(store.float(keys::DIFFUSE_STRENGTH), 0.51);
        assert_eq!(store.float(keys::SPECULAR_STRENGTH), 0.2);
        assert_eq!(store.float(keys::AMBIENT_STRENGTH), 0.17);
        assert!(store.boolean(keys::METALLIC));
        assert!(!store.boolean(keys::VERTEX_COLORS));
        assert_eq!(store.choice(keys::TESSELLATION), "15");
        assert_eq!(store.choice(keys::SHADING), "glossy");
        assert!(!store.boolean(keys::ORIGINAL_SCALE));
    }

    #[test]
    fn test_every_key_is_registered() {
        let store = default_store();
        for key in [
            keys::SHININESS,
            keys::DIFFUSE_STRENGTH,
            keys::SPECULAR_STRENGTH,
            keys::AMBIENT_STRENGTH,
            keys::METALLIC,
            keys::HUE,
            keys::SATURATION,
            keys::LIGHTNESS,
            keys::VERTEX_COLORS,
            keys::LIGHT_HUE,
            keys::LIGHT_SATURATION,
            keys::LIGHT_LIGHTNESS,
            keys::LIGHT_X,
            keys::LIGHT_Y,
            keys::LIGHT_Z,
            keys::TESSELLATION,
            keys::LID,
            keys::BODY,
            keys::BOTTOM,
            keys::FIT_LID,
            keys::ORIGINAL_SCALE,
            keys::SHADING,
        ] {
            assert!(store.exists(key), "missing parameter '{}'", key);
        }
    }

    #[test]
    fn test_shading_options_cover_every_mode() {
        let store = default_store();
        let spec = store
            .specs()
            .iter()
            .find(|s| s.name == keys::SHADING)
            .expect("shading registered");
        assert_eq!(spec.options.len(), ShadingMode::ALL.len());
    }

    #[test]
    fn test_schema_serializes() {
        let store = default_store();
        let json = serde_json::to_string(store.specs()).unwrap();
        assert!(json.contains("\"tessellation\""));
        assert!(json.contains("\"Material color\""));
    }

    #[test]
    fn test_editor_writes_flow_through() {
        let store = default_store();
        store
            .set(keys::TESSELLATION, ParamValue::Choice("30".into()))
            .unwrap();
        assert_eq!(store.choice(keys::TESSELLATION), "30");
    }
}
