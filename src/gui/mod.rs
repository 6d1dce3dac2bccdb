use kiss3d::resource::TextureManager;
use kiss3d::window::Window;
use log::info;

use self::renderers::{TextureFrameSink, TextureSpriteRenderer};
use self::view::View;
use crate::assets::{load_surface, probe_dimensions, AssetCache};
use crate::config::DemoConfig;
use crate::consts::GRAVITY;
use crate::error::DemoError;
use crate::field::AsteroidField;
use crate::frame_loop::{FrameLoop, RunSummary};
use crate::physics::Space;
use crate::render::{RenderMode, SoftwareSpriteRenderer, SpriteRenderer};
use crate::sprite::Sprite;

mod controller;
mod renderers;
mod view;

const ASTEROID_TEXTURE_NAME: &str = "asteroid";

/// Opens the window, fills it with asteroids, and runs until the window is
/// closed.
pub fn run(config: &DemoConfig) -> Result<RunSummary, DemoError> {
    if config.width == 0 || config.height == 0 {
        return Err(DemoError::Init(format!(
            "window must have a nonzero size, got {}x{}",
            config.width, config.height
        )));
    }

    info!(
        "opening {}x{} window with {} asteroids, {} renderer, seed {:?}",
        config.width, config.height, config.asteroid_count, config.render_mode, config.seed
    );
    let mut window = Window::new_with_size(&config.title, config.width, config.height);
    // Logical pixels. `window.width()` and `window.height()` are physical and
    // differ from these on HiDPI screens.
    let viewport = (config.width, config.height);
    window.set_background_color(0.0, 0.0, 0.0);

    let mut rng = config.rng();
    let mut field = AsteroidField::new(Space::new(GRAVITY));

    match config.render_mode {
        RenderMode::Texture => {
            // TextureManager panics on a bad path, so find out first.
            let (width, height) = probe_dimensions(&config.asset_path)?;
            let texture = TextureManager::get_global_manager(|tm| {
                tm.add(&config.asset_path, ASTEROID_TEXTURE_NAME)
            });

            field.spawn(
                &config.spawn_params(),
                &mut rng,
                &Sprite::texture(width, height),
            );
            let renderer = TextureSpriteRenderer::new(
                &mut window,
                (viewport.0 as f32, viewport.1 as f32),
                field.sprites(),
                &texture,
            );
            drive(View::new(window), renderer, field)
        }
        RenderMode::Software => {
            let mut surfaces = AssetCache::new();
            let surface = surfaces.get_or_load(&config.asset_path, load_surface)?;

            field.spawn(&config.spawn_params(), &mut rng, &Sprite::surface(surface));
            let sink = TextureFrameSink::new(&mut window, viewport);
            let renderer = SoftwareSpriteRenderer::new(viewport.0, viewport.1, sink);
            drive(View::new(window), renderer, field)
        }
    }
}

fn drive<R: SpriteRenderer>(
    view: View,
    renderer: R,
    field: AsteroidField,
) -> Result<RunSummary, DemoError> {
    let mut frame_loop = FrameLoop::new(view, renderer, field);
    let summary = frame_loop.run()?;
    info!("window closed after {} frames", summary.frames);
    Ok(summary)
}
