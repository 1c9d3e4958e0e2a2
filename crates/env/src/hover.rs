//! Hover task: fly to a target point and hold it.

use crate::env::Env;
use crate::reward::hover_reward;
use sim::{PointMassQuad, SimConfig, SimError, Simulator, Vec3};

/// Simulator timesteps bundled into each [`Env::step`] call.
pub const ACTION_REPEAT: usize = 3;
/// Floats in one pose snapshot: x, y, z, roll, pitch, yaw.
pub const POSE_COMPONENTS: usize = 6;
/// Observation length: one pose snapshot per bundled timestep.
pub const STATE_SIZE: usize = ACTION_REPEAT * POSE_COMPONENTS;
/// Rotor commands per action.
pub const ACTION_SIZE: usize = 4;
/// Advertised lower bound for rotor commands.
pub const ACTION_LOW: f32 = 0.0;
/// Advertised upper bound for rotor commands.
pub const ACTION_HIGH: f32 = 900.0;

/// Hover task parameters.
#[derive(Clone, Copy, Debug)]
pub struct TaskConfig {
    /// Point the vehicle is rewarded for holding.
    pub target_pos: Vec3,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            target_pos: Vec3::new(0.0, 0.0, 10.0),
        }
    }
}

/// Episode wrapper that turns a [`Simulator`] into a hover task.
///
/// Owns its simulator for the whole run. Every [`Env::step`] call
/// forwards one rotor command for [`ACTION_REPEAT`] consecutive
/// timesteps and concatenates the pose snapshot taken after each one,
/// oldest first, so an agent sees a short motion history instead of a
/// single frame.
///
/// The actuator bounds are wiring hints for agents; commands are
/// forwarded to the simulator untouched.
pub struct HoverTask<S: Simulator> {
    /// Observation length returned by `step` and `reset`.
    pub state_size: usize,
    /// Rotor commands per action.
    pub action_size: usize,
    /// Advertised lower actuator bound (not enforced).
    pub action_low: f32,
    /// Advertised upper actuator bound (not enforced).
    pub action_high: f32,
    /// Point the vehicle is rewarded for holding.
    pub target_pos: Vec3,
    sim: S,
}

impl<S: Simulator> HoverTask<S> {
    /// Wrap `sim` with the default target of 10 m straight up.
    #[must_use]
    pub fn new(sim: S) -> Self {
        Self::with_config(sim, TaskConfig::default())
    }

    /// Wrap `sim` with explicit task parameters.
    #[must_use]
    pub fn with_config(sim: S, config: TaskConfig) -> Self {
        Self {
            state_size: STATE_SIZE,
            action_size: ACTION_SIZE,
            action_low: ACTION_LOW,
            action_high: ACTION_HIGH,
            target_pos: config.target_pos,
            sim,
        }
    }

    /// Read access to the wrapped simulator.
    pub fn sim(&self) -> &S {
        &self.sim
    }
}

impl HoverTask<PointMassQuad> {
    /// Hover task backed by the bundled point-mass simulator.
    ///
    /// # Errors
    ///
    /// Propagates [`SimError`] when `sim_config` fails validation.
    pub fn point_mass(sim_config: SimConfig, task_config: TaskConfig) -> Result<Self, SimError> {
        Ok(Self::with_config(PointMassQuad::new(sim_config)?, task_config))
    }
}

impl<S: Simulator> Env for HoverTask<S> {
    type Action = [f32; ACTION_SIZE];

    /// Run one rotor command for [`ACTION_REPEAT`] timesteps.
    ///
    /// The bundle always runs to completion: reward accumulates and a
    /// pose snapshot is recorded after every timestep, and the returned
    /// flag is whatever the simulator reported after the final one. A
    /// terminal flag raised earlier in the bundle neither ends the loop
    /// nor shows up in the result.
    fn step(&mut self, rotor_speeds: [f32; ACTION_SIZE]) -> (Vec<f32>, f32, bool) {
        let mut next_state = Vec::with_capacity(self.state_size);
        let mut reward = 0.0;
        let mut done = false;
        for _ in 0..ACTION_REPEAT {
            done = self.sim.next_timestep(rotor_speeds);
            reward += hover_reward(
                self.sim.pose(),
                self.sim.velocity(),
                self.sim.time(),
                self.target_pos,
            );
            next_state.extend_from_slice(&self.sim.pose().to_array());
        }
        (next_state, reward, done)
    }

    fn reset(&mut self) -> Vec<f32> {
        self.sim.reset();
        let pose = self.sim.pose().to_array();
        let mut state = Vec::with_capacity(self.state_size);
        for _ in 0..ACTION_REPEAT {
            state.extend_from_slice(&pose);
        }
        state
    }

    fn obs_size(&self) -> usize {
        self.state_size
    }

    fn action_size(&self) -> usize {
        self.action_size
    }
}
