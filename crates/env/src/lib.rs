//! Episode control and reward shaping for quadrotor flight tasks.
//!
//! A task wraps a [`sim::Simulator`] and presents the classic
//! `step`/`reset` interface to agents and episode runners.

pub mod env;
pub mod hover;
pub mod reward;

pub use env::Env;
pub use hover::{
    HoverTask, TaskConfig, ACTION_HIGH, ACTION_LOW, ACTION_REPEAT, ACTION_SIZE, POSE_COMPONENTS,
    STATE_SIZE,
};
pub use reward::hover_reward;
