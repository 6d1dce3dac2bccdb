use std::fmt::Display;

use crate::error::RenderError;
use crate::sprite::Sprite;

mod software;

pub use software::{FrameSink, LastFrame, SoftwareSpriteRenderer};

/// Which way sprites get onto the screen. Picked once at startup and passed
/// down, never consulted globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RenderMode {
    /// Rotate and composite on the CPU, then upload the finished frame.
    Software,
    /// Upload each image once and let the GPU rotate it at draw time.
    Texture,
}

impl Default for RenderMode {
    fn default() -> Self {
        RenderMode::Texture
    }
}

impl Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Software => write!(f, "software"),
            RenderMode::Texture => write!(f, "texture"),
        }
    }
}

/// Something that can draw sprites at their current placement.
///
/// A frame goes `clear`, then any mix of `render_one` / `render_many`, then
/// `flush`. Any error is fatal for the run.
pub trait SpriteRenderer {
    fn clear(&mut self);

    fn render_one(&mut self, sprite: &Sprite) -> Result<(), RenderError>;

    fn render_many(&mut self, sprites: &[Sprite]) -> Result<(), RenderError> {
        for sprite in sprites {
            self.render_one(sprite)?;
        }
        Ok(())
    }

    /// Hands the finished frame to whatever is going to show it.
    fn flush(&mut self) -> Result<(), RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mode_names() {
        assert_eq!(RenderMode::default(), RenderMode::Texture);
        assert_eq!(RenderMode::Software.to_string(), "software");
        assert_eq!(RenderMode::Texture.to_string(), "texture");
    }
}
