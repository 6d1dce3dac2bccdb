use log::debug;
use rand::Rng;
use rapier2d::prelude::*;

use super::spawn::SpawnParams;
use crate::consts::{
    ASTEROID_ELASTICITY, ASTEROID_FRICTION, ASTEROID_MASS, ASTEROID_MOMENT, ASTEROID_RADIUS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(RigidBodyHandle);

/// Where a body is and which way it's facing. Angle is in radians, and is
/// whatever rapier reports, so it lives in (-pi, pi].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

/// Snapshot of everything observable about a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Point<Real>,
    pub velocity: Vector<Real>,
    pub angle: Real,
    pub angular_velocity: Real,
}

impl BodyState {
    pub fn pose(&self) -> Pose {
        Pose {
            x: self.position.x,
            y: self.position.y,
            angle: self.angle,
        }
    }
}

/// The physics world. Owns every body and collider, and the rapier machinery
/// needed to step them.
pub struct Space {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    steps: u64,
}

impl Space {
    /// Gravity is given as plain `[x, y]` so callers never need rapier's
    /// nalgebra to build one.
    pub fn new(gravity: [f32; 2]) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        // World units are pixels, so scale rapier's internal tolerances to
        // the size of the things we're simulating.
        integration_parameters.length_unit = ASTEROID_RADIUS;

        Space {
            gravity: Vector::new(gravity[0], gravity[1]),
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            steps: 0,
        }
    }

    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    /// Scatters `params.count` asteroids, each a unit-mass body with a single
    /// circular collider. Returns their handles in creation order.
    pub fn spawn<R: Rng>(&mut self, params: &SpawnParams, rng: &mut R) -> Vec<BodyHandle> {
        let mut handles = Vec::with_capacity(params.count);
        for _ in 0..params.count {
            // Draw order matters for reproducibility: velocity, then position,
            // then spin.
            let vx = params.velocity.sample(rng);
            let vy = params.velocity.sample(rng);
            let x = params.x.sample(rng);
            let y = params.y.sample(rng);
            let spin = params.angular_velocity.sample(rng);

            handles.push(self.add_asteroid(Vector::new(x, y), Vector::new(vx, vy), spin));
        }
        debug!("spawned {} bodies, {} total", params.count, self.len());
        handles
    }

    fn add_asteroid(&mut self, position: Vector<Real>, velocity: Vector<Real>, spin: Real) -> BodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(position)
            .linvel(velocity)
            .angvel(spin)
            .additional_mass_properties(MassProperties::new(
                Point::origin(),
                ASTEROID_MASS,
                ASTEROID_MOMENT,
            ))
            .can_sleep(false)
            .build();
        let handle = self.bodies.insert(body);

        // Zero density: all of the mass comes from the body, so the collider
        // doesn't change it.
        let shape = ColliderBuilder::ball(ASTEROID_RADIUS)
            .density(0.0)
            .restitution(ASTEROID_ELASTICITY)
            .friction(ASTEROID_FRICTION)
            .build();
        self.colliders
            .insert_with_parent(shape, handle, &mut self.bodies);

        BodyHandle(handle)
    }

    /// Steps the world forward by exactly `dt` seconds, resolving any
    /// collisions along the way.
    pub fn advance(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
        self.steps += 1;
    }

    /// Number of times `advance` has been called.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    pub fn body_state(&self, handle: BodyHandle) -> Option<BodyState> {
        self.bodies.get(handle.0).map(|body| BodyState {
            position: Point::from(*body.translation()),
            velocity: *body.linvel(),
            angle: body.rotation().angle(),
            angular_velocity: body.angvel(),
        })
    }

    pub fn pose(&self, handle: BodyHandle) -> Option<Pose> {
        self.body_state(handle).map(|state| state.pose())
    }

    /// How many colliders hang off this body. Always one for an asteroid.
    pub fn shapes_of(&self, handle: BodyHandle) -> usize {
        self.bodies
            .get(handle.0)
            .map_or(0, |body| body.colliders().len())
    }
}
