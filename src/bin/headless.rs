use std::path::PathBuf;

use asteroid_drift::assets::{load_surface, AssetCache};
use asteroid_drift::config::DemoConfig;
use asteroid_drift::consts::GRAVITY;
use asteroid_drift::error::DemoError;
use asteroid_drift::field::AsteroidField;
use asteroid_drift::frame_loop::{FrameLoop, RunSummary};
use asteroid_drift::headless::HeadlessDisplay;
use asteroid_drift::physics::Space;
use asteroid_drift::render::{LastFrame, RenderMode, SoftwareSpriteRenderer};
use asteroid_drift::sprite::Sprite;

use clap::Parser;
use log::{error, info};

/// Runs the asteroid field without a window, rasterizing every frame in
/// software.
#[derive(Debug, Parser)]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Seed for the spawn RNG; random if not given
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the last frame, as a PNG
    #[arg(long)]
    output: Option<PathBuf>,

    /// Sprite image to use instead of the default asteroid
    #[arg(long)]
    asset: Option<PathBuf>,
}

fn run(args: &Args) -> Result<RunSummary, DemoError> {
    let defaults = DemoConfig::default();
    let config = DemoConfig {
        render_mode: RenderMode::Software,
        seed: args.seed,
        asset_path: args
            .asset
            .clone()
            .unwrap_or_else(|| defaults.asset_path.clone()),
        ..defaults
    };

    let mut surfaces = AssetCache::new();
    let surface = surfaces.get_or_load(&config.asset_path, load_surface)?;

    let mut rng = config.rng();
    let mut field = AsteroidField::new(Space::new(GRAVITY));
    field.spawn(&config.spawn_params(), &mut rng, &Sprite::surface(surface));
    info!(
        "simulating {} asteroids for {} frames, seed {:?}",
        field.len(),
        args.frames,
        config.seed
    );

    let renderer = SoftwareSpriteRenderer::new(config.width, config.height, LastFrame::new());
    let mut frame_loop = FrameLoop::new(HeadlessDisplay::new(args.frames), renderer, field);
    let summary = frame_loop.run()?;

    if let Some(path) = &args.output {
        match frame_loop.renderer().sink().frame() {
            Some(frame) => {
                frame.save(path)?;
                info!("wrote last frame to {:?}", path);
            }
            None => info!("no frames rendered, nothing written to {:?}", path),
        }
    }

    Ok(summary)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(summary) => info!(
            "ran {} frames, last FPS estimate {:?}",
            summary.frames, summary.last_fps
        ),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
