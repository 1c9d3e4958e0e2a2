//! The boundary between episode logic and whatever advances the physics.

use crate::types::{Pose, Vec3};

/// Initial conditions and episode limit for a simulator.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Starting pose, position plus Euler angles.
    pub init_pose: Pose,
    /// Starting linear velocity.
    pub init_velocity: Vec3,
    /// Starting angular velocity in radians per second per Euler axis.
    pub init_angular_velocity: Vec3,
    /// Episode time limit in seconds.
    pub runtime: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            init_pose: Pose::ZERO,
            init_velocity: Vec3::ZERO,
            init_angular_velocity: Vec3::ZERO,
            runtime: 5.0,
        }
    }
}

/// A rigid-body simulator as seen from the episode layer.
///
/// Implementations own the physical state. Each [`next_timestep`] call
/// advances it by one fixed timestep under the given rotor commands and
/// reports whether a terminal condition has been reached; once raised,
/// the flag stays up until [`reset`].
///
/// [`next_timestep`]: Simulator::next_timestep
/// [`reset`]: Simulator::reset
pub trait Simulator {
    /// Advance one timestep; returns `true` once the episode is over.
    fn next_timestep(&mut self, rotor_speeds: [f32; 4]) -> bool;

    /// Restore the initial conditions captured at construction.
    fn reset(&mut self);

    /// Current pose.
    fn pose(&self) -> Pose;

    /// Current linear velocity.
    fn velocity(&self) -> Vec3;

    /// Elapsed episode time in seconds.
    fn time(&self) -> f32;
}
