//! Reference quadrotor backend: a thrust-and-gravity double integrator.
//!
//! The vehicle is a point mass. Rotor speeds turn into a single thrust
//! force along world-up, attitude integrates the constant initial angular
//! velocity, and there is no drag, torque model or collision response.
//! Episodes end at the configured time limit or when the vehicle leaves
//! the world volume.

use crate::simulator::{SimConfig, Simulator};
use crate::types::{BoundingBox, Pose, Vec3};
use crate::SimError;

/// Fixed timestep, 50 Hz.
pub const DT: f32 = 1.0 / 50.0;
/// Standard gravity, m/s^2.
const GRAVITY: f32 = 9.81;
/// Airframe mass, kg.
const MASS: f32 = 1.0;
/// Thrust per unit of rotor speed, N.
const THRUST_PER_SPEED: f32 = 0.005;
/// Rotor speed at which four rotors exactly cancel gravity.
pub const HOVER_SPEED: f32 = MASS * GRAVITY / (4.0 * THRUST_PER_SPEED);
/// Leaving this volume ends the episode.
const WORLD_BOUNDS: BoundingBox = BoundingBox::new(
    Vec3::new(-300.0, -300.0, 0.0),
    Vec3::new(300.0, 300.0, 300.0),
);

/// Point-mass quadrotor.
///
/// The clock is a tick counter multiplied out to seconds, so it cannot
/// drift over long episodes and lands exactly on timestep-aligned limits.
pub struct PointMassQuad {
    config: SimConfig,
    pose: Pose,
    velocity: Vec3,
    angular_velocity: Vec3,
    ticks: u32,
    done: bool,
}

impl PointMassQuad {
    /// Build a simulator from the given initial conditions.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidRuntime`] when the episode limit is not a
    /// positive finite number of seconds, [`SimError::NonFiniteInit`]
    /// when any initial component is NaN or infinite.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        if !config.runtime.is_finite() || config.runtime <= 0.0 {
            return Err(SimError::InvalidRuntime(config.runtime));
        }
        if !config.init_pose.is_finite()
            || !config.init_velocity.is_finite()
            || !config.init_angular_velocity.is_finite()
        {
            return Err(SimError::NonFiniteInit);
        }
        Ok(Self {
            pose: config.init_pose,
            velocity: config.init_velocity,
            angular_velocity: config.init_angular_velocity,
            ticks: 0,
            done: false,
            config,
        })
    }
}

impl Simulator for PointMassQuad {
    fn next_timestep(&mut self, rotor_speeds: [f32; 4]) -> bool {
        let total_speed: f32 = rotor_speeds.iter().sum();
        let accel = Vec3::new(0.0, 0.0, total_speed * THRUST_PER_SPEED / MASS - GRAVITY);

        // Semi-implicit Euler: velocity first, then position.
        self.velocity += accel * DT;
        self.pose.position += self.velocity * DT;
        self.pose.orientation += self.angular_velocity * DT;
        self.ticks += 1;

        if !self.done {
            if self.time() >= self.config.runtime {
                tracing::debug!("episode over at t={:.2}s: time limit reached", self.time());
                self.done = true;
            } else if !WORLD_BOUNDS.contains(self.pose.position) {
                tracing::debug!(
                    "episode over at t={:.2}s: left world volume at {:?}",
                    self.time(),
                    self.pose.position
                );
                self.done = true;
            }
        }
        self.done
    }

    fn reset(&mut self) {
        self.pose = self.config.init_pose;
        self.velocity = self.config.init_velocity;
        self.angular_velocity = self.config.init_angular_velocity;
        self.ticks = 0;
        self.done = false;
    }

    fn pose(&self) -> Pose {
        self.pose
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    #[allow(clippy::cast_precision_loss)]
    fn time(&self) -> f32 {
        self.ticks as f32 * DT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_time_limit() {
        for runtime in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = SimConfig {
                runtime,
                ..SimConfig::default()
            };
            assert!(matches!(
                PointMassQuad::new(config),
                Err(SimError::InvalidRuntime(_))
            ));
        }
    }

    #[test]
    fn rejects_non_finite_initial_state() {
        let config = SimConfig {
            init_velocity: Vec3::new(0.0, f32::INFINITY, 0.0),
            ..SimConfig::default()
        };
        assert!(matches!(
            PointMassQuad::new(config),
            Err(SimError::NonFiniteInit)
        ));
    }

    #[test]
    fn hover_speed_cancels_gravity() {
        let accel = 4.0 * HOVER_SPEED * THRUST_PER_SPEED / MASS - GRAVITY;
        assert!(accel.abs() < 1e-5, "accel={accel}");
    }
}
