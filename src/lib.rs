//! Parametric teapot demo core: a declarative scene-parameter
//! synchronization loop.
//!
//! An external control surface writes typed parameters into a
//! [`params::ParameterStore`]; once per render tick the
//! [`sync::SceneSynchronizer`] diffs the topology-affecting fields against
//! its previous snapshot, rebuilds the teapot node only when one of them
//! changed, re-applies the cheap material and light uniforms
//! unconditionally, and hands the scene to a [`render::Renderer`].
//! Rendering, asset decoding, the widget toolkit, and the telemetry vendor
//! all live behind narrow traits.

pub mod assets;
pub mod cli;
pub mod color;
pub mod geometry;
pub mod lighting;
pub mod material;
pub mod mesh;
pub mod panel;
pub mod params;
pub mod render;
pub mod scene;
pub mod sync;
pub mod telemetry;
