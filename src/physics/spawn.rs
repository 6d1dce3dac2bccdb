use std::fmt::Display;

use rand::Rng;

/// Integer range that spawn values are drawn from. Sampling is uniform over the
/// half-open interval `[lo, hi)`, except that a degenerate range (`lo == hi`)
/// always yields `lo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRange {
    lo: i32,
    hi: i32,
}

impl SpawnRange {
    pub fn new(lo: i32, hi: i32) -> Self {
        if lo <= hi {
            Self { lo, hi }
        } else {
            Self { lo: hi, hi: lo }
        }
    }

    pub fn point(val: i32) -> Self {
        Self { lo: val, hi: val }
    }

    /// `[-bound, bound)`, the shape used for velocities.
    pub fn symmetric(bound: i32) -> Self {
        Self::new(-bound.abs(), bound.abs())
    }

    pub fn lo(&self) -> i32 {
        self.lo
    }

    pub fn hi(&self) -> i32 {
        self.hi
    }

    pub fn is_degenerate(&self) -> bool {
        self.lo == self.hi
    }

    /// Whether `value` is something `sample` could have produced.
    pub fn contains(&self, value: f32) -> bool {
        if self.is_degenerate() {
            value == self.lo as f32
        } else {
            self.lo as f32 <= value && value < self.hi as f32 && value.fract() == 0.0
        }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        if self.is_degenerate() {
            self.lo as f32
        } else {
            rng.gen_range(self.lo..self.hi) as f32
        }
    }
}

impl Display for SpawnRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.lo, self.hi)
    }
}

/// Everything `Space::spawn` needs to know to scatter a population of
/// asteroids. Positions are drawn per-axis, so `x` and `y` together describe
/// the spawn rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnParams {
    pub count: usize,
    pub x: SpawnRange,
    pub y: SpawnRange,
    pub velocity: SpawnRange,
    pub angular_velocity: SpawnRange,
}

impl SpawnParams {
    pub fn in_rect(count: usize, width: i32, height: i32, vel: i32, avel: i32) -> Self {
        SpawnParams {
            count,
            x: SpawnRange::new(0, width),
            y: SpawnRange::new(0, height),
            velocity: SpawnRange::symmetric(vel),
            angular_velocity: SpawnRange::symmetric(avel),
        }
    }
}
