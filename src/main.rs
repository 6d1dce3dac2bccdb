use asteroid_drift::config::DemoConfig;
use asteroid_drift::gui;
use asteroid_drift::render::RenderMode;

use clap::Parser;
use log::{error, info};

#[derive(Debug, Parser)]
struct Args {
    /// How sprites get to the screen
    #[arg(long, value_enum, default_value_t = RenderMode::Texture)]
    renderer: RenderMode,

    /// Seed for the spawn RNG; random if not given
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = DemoConfig {
        render_mode: args.renderer,
        seed: args.seed,
        ..DemoConfig::default()
    };

    match gui::run(&config) {
        Ok(summary) => {
            info!(
                "ran {} frames, last FPS estimate {:?}",
                summary.frames, summary.last_fps
            );
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
