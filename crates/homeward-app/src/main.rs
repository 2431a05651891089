use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use log::info;
use serde::de::DeserializeOwned;

use homeward_app::adapter::{FixedClock, FrameClock, RealtimeClock};
use homeward_app::autopilot::{AutoMenu, AutopilotInput};
use homeward_app::demo::demo_map;
use homeward_app::game_loop::{self, LoopLimits};
use homeward_app::log_renderer::LogRenderer;
use homeward_app::screens::TerminalArt;
use homeward_core::config::GameConfig;
use homeward_core::map::MapData;
use homeward_core::mask::SpriteMasks;
use homeward_sim::{SessionEngine, SimConfig};

#[derive(Parser, Debug)]
#[command(name = "homeward")]
#[command(about = "Run Homeward sessions headless with an autopilot player")]
struct Cli {
    /// Tuning overrides (JSON, missing fields keep their defaults)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Map data (JSON); the built-in demo map is used when omitted
    #[arg(long)]
    map: Option<PathBuf>,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Sessions still running after this many frames are abandoned
    #[arg(long, default_value_t = 18_000)]
    max_frames: u64,
    /// Times the autopilot picks Play Again
    #[arg(long, default_value_t = 0)]
    restarts: u32,
    /// Fixed frame delta in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Pace frames against the wall clock instead of using --dt
    #[arg(long, default_value_t = false)]
    realtime: bool,
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Log a status line every this many frames
    #[arg(long, default_value_t = 60)]
    log_every: u64,
    /// How far away the autopilot starts shooting, in pixels
    #[arg(long, default_value_t = 700.0)]
    engage_range: f32,
    #[arg(long)]
    win_art: Option<PathBuf>,
    #[arg(long)]
    game_over_art: Option<PathBuf>,
}

fn load_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {what} {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {what} {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let game: GameConfig = match &cli.config {
        Some(path) => load_json(path, "config")?,
        None => GameConfig::default(),
    };
    let map: MapData = match &cli.map {
        Some(path) => load_json(path, "map")?,
        None => {
            info!("no --map given, using the demo map");
            demo_map()
        }
    };

    let screen = Vec2::new(game.screen_width, game.screen_height);
    let config = SimConfig {
        seed: cli.seed,
        masks: SpriteMasks::from_config(&game),
        game,
    };
    let mut engine = SessionEngine::new(config, map).context("setting up the session")?;

    let mut input = AutopilotInput::new(screen, cli.engage_range);
    let mut renderer = LogRenderer::new(cli.log_every);
    let art = TerminalArt::load(cli.win_art.as_deref(), cli.game_over_art.as_deref());
    let mut menu = AutoMenu::new(screen, art);
    let mut clock: Box<dyn FrameClock> = if cli.realtime {
        Box::new(RealtimeClock::new(cli.fps))
    } else {
        Box::new(FixedClock { dt: cli.dt })
    };
    let limits = LoopLimits {
        max_frames_per_session: cli.max_frames,
        max_restarts: cli.restarts,
    };

    let summary = game_loop::run(
        &mut engine,
        &mut input,
        &mut renderer,
        &mut menu,
        clock.as_mut(),
        limits,
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
