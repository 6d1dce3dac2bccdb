use image::{Rgba, RgbaImage};

use super::SpriteRenderer;
use crate::error::RenderError;
use crate::raster::blit;
use crate::sprite::Sprite;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Where a finished software frame goes.
pub trait FrameSink {
    fn submit(&mut self, frame: &RgbaImage) -> Result<(), RenderError>;
}

/// Keeps a copy of the most recent frame and nothing else.
#[derive(Default)]
pub struct LastFrame {
    frame: Option<RgbaImage>,
    submitted: usize,
}

impl LastFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> Option<&RgbaImage> {
        self.frame.as_ref()
    }

    pub fn submitted(&self) -> usize {
        self.submitted
    }
}

impl FrameSink for LastFrame {
    fn submit(&mut self, frame: &RgbaImage) -> Result<(), RenderError> {
        self.frame = Some(frame.clone());
        self.submitted += 1;
        Ok(())
    }
}

/// Composites sprites into a CPU-side canvas. Sprites must carry their own
/// pre-rotated pixels (see `sprite::sync`); this only places them.
pub struct SoftwareSpriteRenderer<S> {
    canvas: RgbaImage,
    sink: S,
}

impl<S: FrameSink> SoftwareSpriteRenderer<S> {
    pub fn new(width: u32, height: u32, sink: S) -> Self {
        SoftwareSpriteRenderer {
            canvas: RgbaImage::from_pixel(width, height, BACKGROUND),
            sink,
        }
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: FrameSink> SpriteRenderer for SoftwareSpriteRenderer<S> {
    fn clear(&mut self) {
        for pixel in self.canvas.pixels_mut() {
            *pixel = BACKGROUND;
        }
    }

    fn render_one(&mut self, sprite: &Sprite) -> Result<(), RenderError> {
        let pixels = sprite
            .pixels()
            .ok_or(RenderError::MissingSurface(sprite.id))?;
        blit(
            &mut self.canvas,
            pixels,
            sprite.x.floor() as i64,
            sprite.y.floor() as i64,
        );
        Ok(())
    }

    fn flush(&mut self) -> Result<(), RenderError> {
        self.sink.submit(&self.canvas)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::sprite::SpriteId;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn white_square(size: u32, x: f32, y: f32) -> Sprite {
        let mut sprite = Sprite::surface(Rc::new(RgbaImage::from_pixel(size, size, WHITE)));
        sprite.x = x;
        sprite.y = y;
        sprite
    }

    #[test]
    fn test_frame_contains_sprites_at_placement() {
        let mut renderer = SoftwareSpriteRenderer::new(8, 8, LastFrame::new());
        let sprites = vec![white_square(2, 1.0, 1.0), white_square(2, 5.0, 6.0)];

        renderer.clear();
        renderer.render_many(&sprites).unwrap();
        renderer.flush().unwrap();

        let frame = renderer.sink().frame().unwrap();
        assert_eq!(*frame.get_pixel(1, 1), WHITE);
        assert_eq!(*frame.get_pixel(2, 2), WHITE);
        assert_eq!(*frame.get_pixel(3, 3), BACKGROUND);
        assert_eq!(*frame.get_pixel(6, 7), WHITE);
        assert_eq!(renderer.sink().submitted(), 1);
    }

    #[test]
    fn test_clear_wipes_previous_frame() {
        let mut renderer = SoftwareSpriteRenderer::new(4, 4, LastFrame::new());
        renderer.render_one(&white_square(4, 0.0, 0.0)).unwrap();
        assert_eq!(*renderer.canvas().get_pixel(0, 0), WHITE);

        renderer.clear();
        assert!(renderer.canvas().pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn test_texture_sprite_cannot_be_rasterized() {
        let mut renderer = SoftwareSpriteRenderer::new(4, 4, LastFrame::new());
        let sprite = Sprite::texture(2, 2).with_id(SpriteId(7));

        let err = renderer.render_one(&sprite).unwrap_err();
        assert!(matches!(err, RenderError::MissingSurface(SpriteId(7))));
    }

    #[test]
    fn test_render_many_stops_at_first_failure() {
        let mut renderer = SoftwareSpriteRenderer::new(4, 4, LastFrame::new());
        let sprites = vec![
            Sprite::texture(2, 2).with_id(SpriteId(0)),
            white_square(4, 0.0, 0.0),
        ];

        assert!(renderer.render_many(&sprites).is_err());
        assert_eq!(*renderer.canvas().get_pixel(0, 0), BACKGROUND);
    }
}
