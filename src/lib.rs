//! One-dimensional two-body collision calculator.
//!
//! [`simulate`] takes two masses, two velocities and a coefficient of
//! restitution and returns a [`CollisionOutcome`] with every body's state
//! before and after, plus the momentum and kinetic-energy totals.
//!
//! ```
//! let out = crashcourse::simulate(3.0, 6.0, 2.0, -4.0, 0.0)?;
//! assert_eq!(out.body1_final().velocity(), 2.0);
//! assert_eq!(out.total_momentum_final(), 10.0);
//! # Ok::<(), crashcourse::error::Error>(())
//! ```
//!
//! The [`scenario`] module sits in front of the calculator with
//! collision-type labels, an input range policy and preset scenarios.

pub mod core;
pub mod error;
pub mod scenario;

#[cfg(feature = "python")]
mod python;

pub use crate::core::{simulate, BodyState, CollisionOutcome};
pub use crate::error::{Error, Result};
