use std::rc::Rc;

use image::RgbaImage;
use kiss3d::context::Context;
use kiss3d::resource::{Texture, TextureManager};
use kiss3d::scene::PlanarSceneNode;
use kiss3d::window::Window;

use crate::error::RenderError;
use crate::render::FrameSink;

const FRAME_TEXTURE_NAME: &str = "software-frame";

/// Shows software-rendered frames by re-uploading them into a texture on a
/// rectangle that covers the whole window.
pub struct TextureFrameSink {
    texture: Rc<Texture>,
    size: (u32, u32),
    // Held so the rectangle stays in the scene.
    _node: PlanarSceneNode,
}

impl TextureFrameSink {
    /// `size` is the window size in logical pixels, which is also the size of
    /// the frames that will be submitted.
    pub fn new(window: &mut Window, size: (u32, u32)) -> Self {
        let texture = TextureManager::get_global_manager(|tm| tm.add_empty(FRAME_TEXTURE_NAME));

        let mut node = window.add_rectangle(size.0 as f32, size.1 as f32);
        node.set_texture(Rc::clone(&texture));

        TextureFrameSink {
            texture,
            size,
            _node: node,
        }
    }
}

fn check_frame_size(frame: &RgbaImage, size: (u32, u32)) -> Result<(), RenderError> {
    if frame.dimensions() != size {
        return Err(RenderError::Present(format!(
            "frame is {:?} but the window is {:?}",
            frame.dimensions(),
            size
        )));
    }
    Ok(())
}

impl FrameSink for TextureFrameSink {
    fn submit(&mut self, frame: &RgbaImage) -> Result<(), RenderError> {
        check_frame_size(frame, self.size)?;

        let ctxt = Context::get();
        ctxt.active_texture(Context::TEXTURE0);
        ctxt.bind_texture(Context::TEXTURE_2D, Some(&*self.texture));
        ctxt.tex_image2d(
            Context::TEXTURE_2D,
            0,
            Context::RGBA as i32,
            self.size.0 as i32,
            self.size.1 as i32,
            0,
            Context::RGBA,
            Some(frame.as_raw()),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;

    #[test]
    fn test_canvas_matches_logical_window_size() {
        let config = DemoConfig::default();
        let canvas = RgbaImage::new(config.width, config.height);

        assert!(check_frame_size(&canvas, (config.width, config.height)).is_ok());
        // A 2x display reports double the size in physical pixels.
        match check_frame_size(&canvas, (2 * config.width, 2 * config.height)) {
            Err(RenderError::Present(_)) => {}
            other => panic!("expected a size mismatch, got {:?}", other),
        }
    }
}
