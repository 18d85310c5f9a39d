//! Starmine headless driver.
//!
//! A minimal 2D arcade shooter simulation:
//! - **bevy_ecs** for the entity-component-system core
//! - **fastrand** for seedable enemy spawning
//! - **configparser** for the INI game config
//!
//! This executable is the platform adapter: it parses CLI flags, loads the
//! configuration, registers the ship and mine animation definitions and
//! drives the [`GameLoop`] with a fixed timestep and a scripted analog
//! flight path, logging the draw-command count once per simulated second.
//! A windowed front end would replace only this file — polling real devices
//! into the per-tick [`InputSample`] and replaying the returned draw
//! commands against its renderer.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 7 --ticks 1200
//! ```

use clap::Parser;
use glam::Vec2;
use std::path::PathBuf;

use starmine::game::GameLoop;
use starmine::resources::animationstore::{AnimationSpec, AnimationStore};
use starmine::resources::gameconfig::GameConfig;
use starmine::resources::input::InputSample;

/// Starmine 2D
#[derive(Parser)]
#[command(version, about = "A minimal 2D arcade-shooter simulation core")]
struct Cli {
    /// Seed for the enemy spawner's random source.
    #[arg(long, default_value_t = 0x5747)]
    seed: u64,

    /// Number of ticks to simulate before exiting.
    #[arg(long, default_value_t = 1200)]
    ticks: u64,

    /// Path to the configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Ship and mine sheets from the original content pack: horizontal strips,
/// 8 frames at 30 fps, looping.
fn default_animations() -> AnimationStore {
    let mut store = AnimationStore::new();
    store.insert(
        "ship",
        AnimationSpec {
            tex_key: "ship-sheet".into(),
            origin: Vec2::ZERO,
            frame_width: 115.0,
            frame_height: 69.0,
            frame_count: 8,
            fps: 30.0,
            looped: true,
        },
    );
    store.insert(
        "mine",
        AnimationSpec {
            tex_key: "mine-sheet".into(),
            origin: Vec2::ZERO,
            frame_width: 47.0,
            frame_height: 61.0,
            frame_count: 8,
            fps: 30.0,
            looped: true,
        },
    );
    store
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    let start = Vec2::new(0.0, config.viewport_height as f32 * 0.5);
    let dt = 1.0 / config.target_fps as f32;
    let fps = config.target_fps as u64;

    let mut game = GameLoop::new(config, cli.seed);
    game.init(default_animations(), "ship", start, "mine");

    let mut input = InputSample::default();
    for frame in 0..cli.ticks {
        let t = frame as f32 * dt;

        // Scripted flight path standing in for a real stick.
        input.stick = Vec2::new((t * 0.6).sin(), (t * 1.1).cos() * 0.5);

        let commands = game.tick(dt, &input);

        if frame % fps == 0 {
            log::info!("t={t:>6.1}s sprites={}", commands.len());
        }
        if game.should_exit() {
            log::info!("exit requested at t={t:.2}s");
            break;
        }
    }
}
