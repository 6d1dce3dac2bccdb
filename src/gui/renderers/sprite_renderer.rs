use std::rc::Rc;

use kiss3d::resource::Texture;
use kiss3d::scene::PlanarSceneNode;
use kiss3d::window::Window;
use nalgebra::{Translation2, UnitComplex};

use crate::error::RenderError;
use crate::render::SpriteRenderer;
use crate::sprite::Sprite;

/// Draws sprites as textured planar rectangles, letting the GPU do the
/// rotation. There's one scene node per sprite, made up front, so nothing is
/// allocated per frame.
pub struct TextureSpriteRenderer {
    nodes: Vec<PlanarSceneNode>,
    viewport: (f32, f32),
}

impl TextureSpriteRenderer {
    /// `viewport` is the window size in logical pixels, the units the planar
    /// camera works in. Not `window.width()`, which is physical.
    pub fn new(
        window: &mut Window,
        viewport: (f32, f32),
        sprites: &[Sprite],
        texture: &Rc<Texture>,
    ) -> Self {
        // Node i is for SpriteId(i).
        let nodes = sprites
            .iter()
            .map(|sprite| {
                let mut node = window.add_rectangle(sprite.width as f32, sprite.height as f32);
                node.set_texture(Rc::clone(texture));
                node.set_visible(false);
                node
            })
            .collect();

        TextureSpriteRenderer { nodes, viewport }
    }
}

/// Sprites are placed in window pixels with y down and the origin in the
/// corner. kiss3d's planar scene has y up and the origin in the middle, so
/// flip y (and with it, the direction of rotation).
fn to_planar(sprite: &Sprite, viewport: (f32, f32)) -> (Translation2<f32>, UnitComplex<f32>) {
    let (cx, cy) = sprite.center();
    let (width, height) = viewport;
    (
        Translation2::new(cx - width / 2.0, height / 2.0 - cy),
        UnitComplex::new(-sprite.angle),
    )
}

impl SpriteRenderer for TextureSpriteRenderer {
    fn clear(&mut self) {
        for node in self.nodes.iter_mut() {
            node.set_visible(false);
        }
    }

    fn render_one(&mut self, sprite: &Sprite) -> Result<(), RenderError> {
        let node = self
            .nodes
            .get_mut(sprite.id.0)
            .ok_or(RenderError::UnknownSprite(sprite.id))?;

        let (translation, rotation) = to_planar(sprite, self.viewport);
        node.set_local_translation(translation);
        node.set_local_rotation(rotation);
        node.set_visible(true);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), RenderError> {
        // Nodes are drawn by the window itself when it renders.
        Ok(())
    }
}
