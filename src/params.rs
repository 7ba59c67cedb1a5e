//! Typed, bounded parameters and the store the control surface writes into.
//!
//! Parameters are predefined by the host and mutated in place by an external
//! editor (a UI panel, a config watcher, a message handler). The store pushes
//! no notifications: the scene synchronizer polls it once per tick. Range and
//! step metadata exist for the editor's benefit only; out-of-range numeric
//! writes are accepted as-is.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Runtime value of a parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Float(f32),
    /// Enumerated string, e.g. a shading-mode name or a tessellation level
    /// picked from a fixed list.
    Choice(String),
}

impl ParamValue {
    /// Human-readable name of the variant, used in error messages.
    fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Float(_) => "float",
            ParamValue::Bool(_) => "bool",
            ParamValue::Choice(_) => "choice",
        }
    }

    /// Whether two values hold the same variant.
    fn same_type(&self, other: &ParamValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// A parameter definition with editor metadata.
#[derive(Clone, Debug, Serialize)]
pub struct ParamSpec {
    /// Unique key within the store.
    pub name: String,
    /// Panel group the editor should place this parameter under.
    pub group: String,
    /// Starting value; also fixes the parameter's type for its lifetime.
    pub default: ParamValue,
    /// Inclusive minimum (floats only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f32>,
    /// Inclusive maximum (floats only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f32>,
    /// Step granularity for the editor's slider (floats only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f32>,
    /// Allowed values (choices only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl ParamSpec {
    /// Create a new float parameter definition.
    pub fn float(name: impl Into<String>, default: f32) -> Self {
        Self {
            name: name.into(),
            group: String::new(),
            default: ParamValue::Float(default),
            min: None,
            max: None,
            step: None,
            options: Vec::new(),
        }
    }

    /// Create a new boolean parameter definition.
    pub fn boolean(name: impl Into<String>, default: bool) -> Self {
        Self {
            name: name.into(),
            group: String::new(),
            default: ParamValue::Bool(default),
            min: None,
            max: None,
            step: None,
            options: Vec::new(),
        }
    }

    /// Create a new enumerated parameter definition.
    pub fn choice(
        name: impl Into<String>,
        default: impl Into<String>,
        options: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            group: String::new(),
            default: ParamValue::Choice(default.into()),
            min: None,
            max: None,
            step: None,
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Builder: set min/max/step range metadata.
    pub fn with_range(mut self, min: f32, max: f32, step: f32) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self.step = Some(step);
        self
    }

    /// Builder: set the panel group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }
}

/// The parameter store - holds all host-defined parameters.
///
/// Writes may arrive from any thread; the synchronizer's read pass happens
/// once per tick, so a reader-writer lock around the map is sufficient.
/// Parameters are created at initialization and never destroyed.
pub struct ParameterStore {
    specs: Vec<ParamSpec>,
    values: RwLock<HashMap<String, ParamValue>>,
}

impl ParameterStore {
    /// Create a store from a set of parameter definitions.
    pub fn new(specs: Vec<ParamSpec>) -> Self {
        let values = specs
            .iter()
            .map(|s| (s.name.clone(), s.default.clone()))
            .collect();
        Self {
            specs,
            values: RwLock::new(values),
        }
    }

    /// Get the current value of a parameter.
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.values.read().get(name).cloned()
    }

    /// Overwrite a parameter's value.
    ///
    /// The only validation is type-matching: a parameter keeps the type of
    /// its default for its whole lifetime, and writes are never allowed to
    /// introduce new names. Range clamping is the editor's job.
    pub fn set(&self, name: &str, value: ParamValue) -> Result<(), String> {
        let mut values = self.values.write();
        match values.get_mut(name) {
            Some(current) => {
                if !current.same_type(&value) {
                    return Err(format!(
                        "type mismatch for '{}': expected {}, got {}",
                        name,
                        current.type_name(),
                        value.type_name()
                    ));
                }
                *current = value;
                Ok(())
            }
            None => Err(format!("unknown parameter '{}'", name)),
        }
    }

    /// Read a float parameter.
    ///
    /// Panics if the name is unregistered or holds another type; every name
    /// the synchronizer references must exist in the store, so a miss here
    /// is a configuration error, not a runtime condition to recover from.
    pub fn float(&self, name: &str) -> f32 {
        match self.get(name) {
            Some(ParamValue::Float(v)) => v,
            other => panic!("parameter '{}' is not a registered float: {:?}", name, other),
        }
    }

    /// Read a boolean parameter. Panics on a missing name or wrong type.
    pub fn boolean(&self, name: &str) -> bool {
        match self.get(name) {
            Some(ParamValue::Bool(v)) => v,
            other => panic!("parameter '{}' is not a registered bool: {:?}", name, other),
        }
    }

    /// Read an enumerated parameter. Panics on a missing name or wrong type.
    pub fn choice(&self, name: &str) -> String {
        match self.get(name) {
            Some(ParamValue::Choice(v)) => v,
            other => panic!("parameter '{}' is not a registered choice: {:?}", name, other),
        }
    }

    /// The full parameter schema, in registration order, for an external
    /// editor to lay out its controls.
    pub fn specs(&self) -> &[ParamSpec] {
        &self.specs
    }

    /// Current values of every parameter, for editor display.
    pub fn snapshot(&self) -> HashMap<String, ParamValue> {
        self.values.read().clone()
    }

    /// Check if a parameter exists.
    pub fn exists(&self, name: &str) -> bool {
        self.values.read().contains_key(name)
    }

    /// Number of registered parameters.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ParameterStore {
        ParameterStore::new(vec![
            ParamSpec::float("shininess", 40.0).with_range(1.0, 400.0, 1.0),
            ParamSpec::boolean("metallic", true),
            ParamSpec::choice("shading", "glossy", &["glossy", "flat"]),
        ])
    }

    #[test]
    fn test_defaults_visible_through_get() {
        let s = store();
        assert_eq!(s.get("shininess"), Some(ParamValue::Float(40.0)));
        assert_eq!(s.get("metallic"), Some(ParamValue::Bool(true)));
        assert_eq!(s.get("missing"), None);
    }

    #[test]
    fn test_set_same_type_succeeds() {
        let s = store();
        s.set("shininess", ParamValue::Float(120.0)).unwrap();
        assert_eq!(s.float("shininess"), 120.0);
    }

    #[test]
    fn test_set_rejects_type_mismatch() {
        let s = store();
        assert!(s.set("metallic", ParamValue::Float(1.0)).is_err());
        // Unchanged after the rejected write.
        assert!(s.boolean("metallic"));
    }

    #[test]
    fn test_set_rejects_unknown_name() {
        let s = store();
        assert!(s.set("nope", ParamValue::Bool(false)).is_err());
        assert!(!s.exists("nope"));
    }

    #[test]
    fn test_out_of_range_float_accepted() {
        // Range metadata is advisory; the store does not clamp.
        let s = store();
        s.set("shininess", ParamValue::Float(9000.0)).unwrap();
        assert_eq!(s.float("shininess"), 9000.0);
    }

    #[test]
    #[should_panic]
    fn test_typed_accessor_panics_on_missing() {
        store().float("not_registered");
    }

    #[test]
    fn test_schema_preserves_registration_order() {
        let s = store();
        let names: Vec<&str> = s.specs().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["shininess", "metallic", "shading"]);
    }
}
