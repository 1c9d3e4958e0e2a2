//! Reward shaping for hover flight.
//!
//! The signal is a sum of four independent terms: a saturating horizontal
//! distance term, a saturating vertical distance term, a linear clock
//! bonus that turns positive once the episode survives past the pivot,
//! and a quadratic well around the climb rate that would close the
//! remaining altitude gap in half a second.

use sim::{Pose, Vec3};

/// Weight on the horizontal (x/y) distance term.
const XY_WEIGHT: f32 = 0.01;
/// Weight on the vertical distance term.
const Z_WEIGHT: f32 = 0.05;
/// Episode time at which the clock bonus crosses zero, seconds.
const TIME_PIVOT: f32 = 3.0;
/// Seconds of survival per unit of clock bonus.
const TIME_SCALE: f32 = 5.0;
/// Time a notional controller is given to close the altitude gap, seconds.
const IDEAL_CLIMB_TIME: f32 = 0.5;
/// Curvature of the penalty around the ideal climb rate.
const CLIMB_WEIGHT: f32 = 0.001;
/// Flat bonus recovered when the climb rate matches the ideal.
const CLIMB_BONUS: f32 = 0.01;

/// Instantaneous reward for holding position at `target_pos`.
///
/// Pure in its arguments: callers sample the simulator once per timestep
/// and pass the snapshot in.
#[must_use]
pub fn hover_reward(pose: Pose, velocity: Vec3, time: f32, target_pos: Vec3) -> f32 {
    let offset = pose.position - target_pos;
    let (dx, dy, dz) = (offset.x.abs(), offset.y.abs(), offset.z.abs());

    let horizontal = XY_WEIGHT * (1.0 - (dx + dy)).tanh();
    let vertical = Z_WEIGHT * (1.0 - dz).tanh();
    let clock = (time - TIME_PIVOT) / TIME_SCALE;

    let ideal_climb_rate = (target_pos.z - pose.position.z) / IDEAL_CLIMB_TIME;
    let climb = -CLIMB_WEIGHT * (velocity.z - ideal_climb_rate).powi(2) + CLIMB_BONUS;

    horizontal + vertical + clock + climb
}
