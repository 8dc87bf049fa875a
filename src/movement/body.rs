//! Movement domain: the physics body seam between locomotion and avian3d.

use avian3d::prelude::*;
use bevy::prelude::*;

/// What the locomotion controller needs from a rigid body.
///
/// Forces are continuous: they act over the current fixed timestep, so the
/// resulting acceleration depends on the body's mass. Forces added during a
/// tick do not show up in `velocity` until the tick is over.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec3;
    fn mass(&self) -> f32;
    fn rotation(&self) -> Quat;
    fn apply_force(&mut self, force: Vec3);
    fn set_rotation(&mut self, rotation: Quat);
    fn set_friction(&mut self, coefficient: f32);
    fn set_linear_drag(&mut self, drag: f32);
}

/// Borrowed view over an avian3d rigid body for one fixed tick.
///
/// Forces are summed while the controller runs and integrated once by
/// [`AvianBody::commit`].
pub struct AvianBody<'a> {
    velocity: &'a mut LinearVelocity,
    rotation: &'a mut Rotation,
    friction: &'a mut Friction,
    damping: &'a mut LinearDamping,
    inverse_mass: f32,
    dt: f32,
    tick_start_velocity: Vec3,
    pending_force: Vec3,
}

impl<'a> AvianBody<'a> {
    pub fn new(
        velocity: &'a mut LinearVelocity,
        rotation: &'a mut Rotation,
        friction: &'a mut Friction,
        damping: &'a mut LinearDamping,
        inverse_mass: f32,
        dt: f32,
    ) -> Self {
        let tick_start_velocity = velocity.0;
        Self {
            velocity,
            rotation,
            friction,
            damping,
            inverse_mass,
            dt,
            tick_start_velocity,
            pending_force: Vec3::ZERO,
        }
    }

    /// Net force collected so far this tick.
    pub fn pending_force(&self) -> Vec3 {
        self.pending_force
    }

    /// Integrate the collected force into the body's velocity.
    pub fn commit(self) -> Vec3 {
        let delta = self.pending_force * self.inverse_mass * self.dt;
        self.velocity.0 += delta;
        delta
    }
}

impl PhysicsBody for AvianBody<'_> {
    fn velocity(&self) -> Vec3 {
        self.tick_start_velocity
    }

    fn mass(&self) -> f32 {
        if self.inverse_mass > 0.0 {
            self.inverse_mass.recip()
        } else {
            0.0
        }
    }

    fn rotation(&self) -> Quat {
        self.rotation.0
    }

    fn apply_force(&mut self, force: Vec3) {
        self.pending_force += force;
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation.0 = rotation.normalize();
    }

    fn set_friction(&mut self, coefficient: f32) {
        *self.friction = Friction::new(coefficient);
    }

    fn set_linear_drag(&mut self, drag: f32) {
        self.damping.0 = drag;
    }
}
