//! Collision calculator: derived body quantities and the one-dimensional
//! restitution model for two bodies meeting along their line of centers.
//!
//! Everything here is a pure function of its arguments.

pub mod body;
pub mod collision;

pub use body::{kinetic_energy, momentum, BodyState};
pub use collision::{final_velocities, simulate, CollisionOutcome};
