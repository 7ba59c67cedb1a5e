//! Headless command-line front end.
//!
//! `simulate` runs the synchronizer for a number of ticks against the
//! trace renderer, optionally replaying a JSON edit script against the
//! parameter store, and reports what the sync loop did. `schema` dumps
//! the control panel's parameter schema for an external editor.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use serde::Deserialize;

use crate::assets::{AssetLoader, NullLoader};
use crate::material::{MaterialSet, MaterialTextures};
use crate::panel;
use crate::params::ParamValue;
use crate::render::{Renderer, TraceRenderer};
use crate::scene::{Camera, Scene};
use crate::sync::SceneSynchronizer;
use crate::telemetry::{LogTelemetry, SessionControls, TelemetrySink};
use crate::geometry::TeapotGenerator;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sync loop headlessly for a fixed number of ticks
    Simulate {
        /// JSON edit script: [{"tick": 3, "name": "hue", "value": 0.5}, ...]
        #[arg(long)]
        script: Option<PathBuf>,

        /// Number of ticks to run
        #[arg(long, default_value_t = 60)]
        ticks: u64,
    },
    /// Print the parameter schema as JSON
    Schema,
}

/// One scripted write into the parameter store.
#[derive(Debug, Deserialize)]
struct ScriptedEdit {
    tick: u64,
    name: String,
    value: ParamValue,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { script, ticks } => {
            let edits = match script {
                Some(path) => load_script(&path)?,
                None => Vec::new(),
            };
            simulate(edits, ticks);
        }
        Commands::Schema => {
            let store = panel::default_store();
            println!("{}", serde_json::to_string_pretty(store.specs())?);
        }
    }
    Ok(())
}

fn load_script(path: &PathBuf) -> Result<Vec<ScriptedEdit>> {
    let mut contents = String::new();
    File::open(path)
        .with_context(|| format!("opening edit script {}", path.display()))?
        .read_to_string(&mut contents)?;
    let edits: Vec<ScriptedEdit> =
        serde_json::from_str(&contents).context("parsing edit script")?;
    Ok(edits)
}

fn simulate(edits: Vec<ScriptedEdit>, ticks: u64) {
    let store = panel::default_store();

    // Headless: texture and cube-map handles never resolve, which the
    // tick path must tolerate.
    let loader = NullLoader;
    let materials = MaterialSet::new(MaterialTextures {
        uv_grid: loader.load_texture("textures/uv_grid.png"),
        diffuse_map: loader.load_texture("textures/checker_diffuse.png"),
        normal_map: loader.load_texture("textures/checker_normal.png"),
        env_map: loader.load_cube_map(&std::array::from_fn(|i| format!("cube/face{}.png", i))),
    });

    let mut sync = SceneSynchronizer::new(TeapotGenerator, materials);
    let mut scene = Scene::new();
    let camera = Camera::default();
    let mut renderer = TraceRenderer::new();
    let mut session = SessionControls::new(LogTelemetry);

    session.resume_logging();

    for tick in 0..ticks {
        for edit in edits.iter().filter(|e| e.tick == tick) {
            if let Err(e) = store.set(&edit.name, edit.value.clone()) {
                warn!("edit at tick {} rejected: {}", tick, e);
            }
        }

        sync.tick(&store, &mut scene);
        renderer.render(&scene, &camera);
    }

    session.sink_mut().log_custom_event("simulation-complete");
    session
        .sink_mut()
        .set_custom_field("rebuild_count", sync.rebuild_count() as f64);
    session.pause_logging();

    println!(
        "ran {} ticks: {} rebuilds, {} triangles in the final frame",
        sync.tick_count(),
        sync.rebuild_count(),
        renderer.last_triangle_count(),
    );
}
