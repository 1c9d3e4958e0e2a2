#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Quadrotor Simulation Layer
//!
//! Rigid-body state types and the [`Simulator`] boundary that episode
//! logic drives. The crate ships one concrete backend, [`PointMassQuad`],
//! a thrust-and-gravity integrator cheap enough for tests and demos;
//! richer engines plug in behind the same trait.
//!
//! ## Key Components
//!
//! -   **State types:** [`Vec3`], [`Pose`] and [`BoundingBox`] in the
//!     [`types`] module. A `Pose` carries world position plus
//!     roll/pitch/yaw Euler angles and flattens to the six-float layout
//!     that observation vectors are assembled from.
//! -   **The seam:** the [`Simulator`] trait in the [`simulator`] module
//!     advances one fixed timestep per call and reports episode
//!     termination. Initial conditions and the episode time limit live
//!     in [`SimConfig`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sim::{PointMassQuad, SimConfig, Simulator, HOVER_SPEED};
//!
//! let mut quad = PointMassQuad::new(SimConfig::default())?;
//! while !quad.next_timestep([HOVER_SPEED; 4]) {
//!     // inspect quad.pose(), quad.velocity(), quad.time()
//! }
//! ```

use thiserror::Error;

pub mod point_mass;
pub mod simulator;
pub mod types;

pub use point_mass::{PointMassQuad, DT, HOVER_SPEED};
pub use simulator::{SimConfig, Simulator};
pub use types::{BoundingBox, Pose, Vec3};

/// Construction-time failures for the bundled simulator.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("episode time limit must be positive and finite, got {0}")]
    InvalidRuntime(f32),
    #[error("initial state contains a non-finite component")]
    NonFiniteInit,
}
