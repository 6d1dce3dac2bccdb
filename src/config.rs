use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::physics::SpawnParams;
use crate::render::RenderMode;

/// Knobs for a run of the demo. Physical constants are not in here; they
/// live in `consts` and don't change.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub asteroid_count: usize,
    /// Velocity components are drawn from `[-max_velocity, max_velocity)`.
    pub max_velocity: i32,
    pub max_angular_velocity: i32,
    pub asset_path: PathBuf,
    pub render_mode: RenderMode,
    /// Fixed seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            title: String::from("Physics kiss3d"),
            width: 800,
            height: 600,
            asteroid_count: 100,
            max_velocity: 10,
            max_angular_velocity: 50,
            asset_path: PathBuf::from("resources/gfx/asteroid_1.png"),
            render_mode: RenderMode::default(),
            seed: None,
        }
    }
}

impl DemoConfig {
    /// Asteroids start anywhere inside the window.
    pub fn spawn_params(&self) -> SpawnParams {
        SpawnParams::in_rect(
            self.asteroid_count,
            self.width as i32,
            self.height as i32,
            self.max_velocity,
            self.max_angular_velocity,
        )
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;
    use crate::physics::SpawnRange;

    #[test]
    fn test_default_spawn_params() {
        let params = DemoConfig::default().spawn_params();
        assert_eq!(params.count, 100);
        assert_eq!(params.x, SpawnRange::new(0, 800));
        assert_eq!(params.y, SpawnRange::new(0, 600));
        assert_eq!(params.velocity, SpawnRange::new(-10, 10));
        assert_eq!(params.angular_velocity, SpawnRange::new(-50, 50));
    }

    #[test]
    fn test_seeded_rng_repeats() {
        let config = DemoConfig {
            seed: Some(42),
            ..DemoConfig::default()
        };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
