use std::path::PathBuf;

use thiserror::Error;

use crate::sprite::SpriteId;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load image {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    /// The software rasterizer was handed a sprite with no CPU-side surface.
    #[error("sprite {0:?} has no surface to rasterize")]
    MissingSurface(SpriteId),

    /// The texture renderer has no scene node for this sprite.
    #[error("sprite {0:?} was never registered with the renderer")]
    UnknownSprite(SpriteId),

    #[error("failed to present frame: {0}")]
    Present(String),
}

/// Everything that can end a run early. None of these are recovered from.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("initialization failed: {0}")]
    Init(String),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write output image: {0}")]
    Output(#[from] image::ImageError),
}
