// Hardcoded physical properties of every asteroid. These are deliberately not
// part of DemoConfig.
pub const ASTEROID_MASS: f32 = 1.0;
pub const ASTEROID_MOMENT: f32 = 66.0;
pub const ASTEROID_RADIUS: f32 = 17.0;
pub const ASTEROID_ELASTICITY: f32 = 0.85;
pub const ASTEROID_FRICTION: f32 = 0.5;

/// Seconds of simulated time per frame, regardless of how long the frame took.
pub const TIMESTEP: f32 = 0.016;

pub const GRAVITY: [f32; 2] = [0.0, 0.0];
