use rand::Rng;

use crate::physics::{BodyHandle, Space, SpawnParams};
use crate::sprite::{self, Sprite, SpriteId};

/// The bodies in a `Space` paired with the sprites that draw them. Sprite `i`
/// always tracks body `i`; the pairing is fixed when they're spawned.
pub struct AsteroidField {
    space: Space,
    bodies: Vec<BodyHandle>,
    sprites: Vec<Sprite>,
}

impl AsteroidField {
    pub fn new(space: Space) -> Self {
        AsteroidField {
            space,
            bodies: vec![],
            sprites: vec![],
        }
    }

    /// Spawns a population into the space, giving each new body its own copy
    /// of `template`. Sprites are synced immediately, so they're in place
    /// before the first frame.
    pub fn spawn<R: Rng>(&mut self, params: &SpawnParams, rng: &mut R, template: &Sprite) {
        for body in self.space.spawn(params, rng) {
            let id = SpriteId(self.sprites.len());
            self.bodies.push(body);
            self.sprites.push(template.clone().with_id(id));
        }
        self.sync_sprites();
    }

    pub fn advance(&mut self, dt: f32) {
        self.space.advance(dt);
    }

    pub fn sync_sprites(&mut self) {
        for (body, sprite) in self.bodies.iter().zip(self.sprites.iter_mut()) {
            if let Some(pose) = self.space.pose(*body) {
                sprite::sync(&pose, sprite);
            }
        }
    }

    pub fn space(&self) -> &Space {
        &self.space
    }

    pub fn bodies(&self) -> &[BodyHandle] {
        &self.bodies
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_sprites_follow_their_bodies() {
        let mut field = AsteroidField::new(Space::new([0.0, 0.0]));
        let mut rng = StdRng::seed_from_u64(5);
        field.spawn(
            &SpawnParams::in_rect(12, 800, 600, 10, 50),
            &mut rng,
            &Sprite::texture(34, 34),
        );

        for _ in 0..30 {
            field.advance(0.016);
            field.sync_sprites();
        }

        assert_eq!(field.len(), 12);
        assert_eq!(field.sprites().len(), 12);
        for (i, (body, sprite)) in field.bodies().iter().zip(field.sprites()).enumerate() {
            let pose = field.space().pose(*body).unwrap();
            assert_eq!(sprite.id, SpriteId(i));
            assert_eq!(sprite.x, pose.x.floor() - 17.0);
            assert_eq!(sprite.y, pose.y.floor() - 17.0);
            assert_eq!(sprite.angle, pose.angle);
        }
    }
}
