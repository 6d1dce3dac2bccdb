use std::rc::Rc;

use image::RgbaImage;

use crate::physics::Pose;
use crate::raster::rotate_surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteId(pub usize);

/// What a sprite actually shows.
#[derive(Debug, Clone)]
pub enum Visual {
    /// A GPU texture. Rotation is applied when drawing, so nothing needs to
    /// change here between frames.
    Texture,
    /// A CPU-side image. `rotated` is regenerated from `original` every sync,
    /// and `original` is shared between every sprite made from the same file.
    Surface {
        original: Rc<RgbaImage>,
        rotated: RgbaImage,
    },
}

/// The on-screen stand-in for one body. Coordinates are in pixels with the
/// origin at the top-left of the window; `(x, y)` is the top-left corner of
/// the sprite, not its center.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub id: SpriteId,
    pub visual: Visual,
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    pub angle: f32,
}

impl Sprite {
    pub fn texture(width: u32, height: u32) -> Self {
        Sprite {
            id: SpriteId(0),
            visual: Visual::Texture,
            x: 0.0,
            y: 0.0,
            width,
            height,
            angle: 0.0,
        }
    }

    pub fn surface(original: Rc<RgbaImage>) -> Self {
        let (width, height) = original.dimensions();
        Sprite {
            id: SpriteId(0),
            visual: Visual::Surface {
                rotated: (*original).clone(),
                original,
            },
            x: 0.0,
            y: 0.0,
            width,
            height,
            angle: 0.0,
        }
    }

    pub fn with_id(mut self, id: SpriteId) -> Self {
        self.id = id;
        self
    }

    /// The image to draw, if this sprite has one on the CPU.
    pub fn pixels(&self) -> Option<&RgbaImage> {
        match &self.visual {
            Visual::Texture => None,
            Visual::Surface { rotated, .. } => Some(rotated),
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (
            self.x + self.width as f32 / 2.0,
            self.y + self.height as f32 / 2.0,
        )
    }
}

/// Moves `sprite` so it's centered on the body at `pose`, and turns it to
/// match.
///
/// CPU-backed sprites get a freshly rotated copy of their original image
/// first. The copy's bounding box is what gets centered, so the size changes
/// as the sprite spins.
pub fn sync(pose: &Pose, sprite: &mut Sprite) {
    if let Visual::Surface { original, rotated } = &mut sprite.visual {
        *rotated = rotate_surface(original, pose.angle);
        sprite.width = rotated.width();
        sprite.height = rotated.height();
    }

    sprite.angle = pose.angle;
    sprite.x = pose.x.floor() - sprite.width as f32 / 2.0;
    sprite.y = pose.y.floor() - sprite.height as f32 / 2.0;
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use approx::assert_relative_eq;
    use image::Rgba;

    use super::*;

    #[test]
    fn test_sync_centers_texture_sprite() {
        let mut sprite = Sprite::texture(34, 21);
        let pose = Pose {
            x: 400.7,
            y: 299.2,
            angle: 1.25,
        };

        sync(&pose, &mut sprite);

        assert_eq!(sprite.x, 400.0 - 17.0);
        assert_eq!(sprite.y, 299.0 - 10.5);
        assert_eq!(sprite.angle, 1.25);
        assert_eq!((sprite.width, sprite.height), (34, 21));
    }

    #[test]
    fn test_sync_floors_negative_positions() {
        let mut sprite = Sprite::texture(10, 10);
        let pose = Pose {
            x: -0.5,
            y: -3.2,
            angle: 0.0,
        };

        sync(&pose, &mut sprite);

        assert_eq!(sprite.x, -1.0 - 5.0);
        assert_eq!(sprite.y, -4.0 - 5.0);
    }

    #[test]
    fn test_sync_rotates_surface_without_touching_original() {
        let original = Rc::new(RgbaImage::from_pixel(4, 2, Rgba([9, 9, 9, 255])));
        let mut sprite = Sprite::surface(original.clone());
        let pose = Pose {
            x: 100.0,
            y: 50.0,
            angle: PI / 2.0,
        };

        sync(&pose, &mut sprite);

        assert_eq!((sprite.width, sprite.height), (2, 4));
        assert_eq!(sprite.pixels().unwrap().dimensions(), (2, 4));
        assert_eq!(original.dimensions(), (4, 2));
        assert_eq!(sprite.x, 99.0);
        assert_eq!(sprite.y, 48.0);
        let (cx, cy) = sprite.center();
        assert_relative_eq!(cx, 100.0);
        assert_relative_eq!(cy, 50.0);

        // Spinning back must start from the original, not the last copy.
        sync(&Pose { angle: 0.0, ..pose }, &mut sprite);
        assert_eq!((sprite.width, sprite.height), (4, 2));
    }
}
