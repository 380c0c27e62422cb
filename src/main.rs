#![forbid(unsafe_code)]

mod assets;
mod event;
mod gamestate;
mod interaction;
mod raycast;
mod session;

use std::error::Error;
use std::sync::Arc;

use clap::Parser;

use golem_blocks::BlockRegistry;
use golem_geom::Vec3;
use golem_world::{TerrainNoise, WorldGenConfig, generate, populate};

use crate::event::Event;
use crate::gamestate::{GameState, load_hotbar};
use crate::session::{PointerRay, Session};

#[derive(Parser, Debug)]
#[command(name = "golem", about = "Headless voxel sandbox simulation", version)]
struct Args {
    /// Assets root containing assets/voxels (defaults to auto-detect)
    #[arg(long)]
    assets: Option<String>,
    /// Terrain seed (overrides worldgen.toml)
    #[arg(long)]
    seed: Option<i32>,
    /// Terrain patch edge length in blocks
    #[arg(long)]
    chunk_size: Option<i32>,
    /// Noise frequency
    #[arg(long)]
    frequency: Option<f32>,
    /// Height amplitude in blocks
    #[arg(long)]
    amplitude: Option<f32>,
    /// Number of 60 Hz ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        log::error!("fatal: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let assets_root = assets::resolve_assets_root(args.assets.clone());
    log::info!("assets root: {}", assets_root.display());

    let reg = Arc::new(BlockRegistry::load_from_path(assets::blocks_path(
        &assets_root,
    ))?);

    let wg_path = assets::worldgen_path(&assets_root);
    let mut cfg = if wg_path.exists() {
        WorldGenConfig::load_from_path(&wg_path)?
    } else {
        WorldGenConfig::default()
    };
    if let Some(v) = args.chunk_size {
        cfg.chunk_size = v;
    }
    if let Some(v) = args.frequency {
        cfg.frequency = v;
    }
    if let Some(v) = args.amplitude {
        cfg.amplitude = v;
    }
    cfg.validate()?;

    let seed = match args.seed.or(cfg.seed) {
        Some(s) => s,
        None => {
            let s = fastrand::i32(1..10000);
            log::info!("no seed configured; using {}", s);
            s
        }
    };

    let noise = TerrainNoise::new(seed, cfg.frequency);
    let placements = generate(&cfg, &noise, &reg);
    log::info!(
        "generated {} placements over a {}x{} patch (seed {})",
        placements.len(),
        cfg.chunk_size,
        cfg.chunk_size,
        seed
    );

    let hotbar = load_hotbar(&reg, &assets::hotbar_path(&assets_root));
    log::info!("hotbar: {} slots", hotbar.len());

    let mut gs = GameState::new(reg.clone(), hotbar, seed as u64);
    populate(&mut gs.store, &reg, &placements);
    let mut session = Session::new(gs);

    // Scripted demo input: point straight down at the center column and, if
    // the hotbar carries a spawner, place one there on the first tick.
    let center = cfg.chunk_size / 2;
    let pointer = Some(PointerRay {
        origin: Vec3::new(
            center as f32 + 0.5,
            cfg.amplitude + 10.0,
            center as f32 + 0.5,
        ),
        dir: Vec3::new(0.0, -1.0, 0.0),
    });
    if let Some(slot) = session
        .gs
        .hotbar
        .iter()
        .position(|b| session.gs.reg.is_spawner(b.id))
    {
        session.queue.emit_now(Event::SlotSelected { slot });
        session.queue.emit_now(Event::RaycastEditRequested { place: true });
    }

    let dt = 1.0 / 60.0;
    for _ in 0..args.ticks {
        session.queue.emit_now(Event::Tick);
        session.step(dt, pointer);
    }

    log::info!(
        "after {} ticks: {} world objects, {} mobs",
        args.ticks,
        session.gs.store.len(),
        session.gs.mobs.len()
    );
    Ok(())
}
