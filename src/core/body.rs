use serde::Serialize;

/// Momentum of a body: p = m v.
#[inline]
pub fn momentum(mass: f64, velocity: f64) -> f64 {
    mass * velocity
}

/// Kinetic energy of a body: 1/2 m v^2.
#[inline]
pub fn kinetic_energy(mass: f64, velocity: f64) -> f64 {
    0.5 * mass * velocity * velocity
}

/// Snapshot of one body at one instant.
///
/// Fields:
/// - `mass`: kg
/// - `velocity`: m/s, signed along the line of centers
/// - `momentum`: kg·m/s, always `mass * velocity`
/// - `kinetic_energy`: J, always `0.5 * mass * velocity^2`
///
/// The derived quantities are computed once in [`BodyState::new`] and the fields
/// are private, so they cannot drift from the stored mass and velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyState {
    mass: f64,
    velocity: f64,
    momentum: f64,
    kinetic_energy: f64,
}

impl BodyState {
    /// Build a state from a (mass, velocity) pair.
    ///
    /// No validation happens here; mass positivity is enforced at the collision level.
    pub fn new(mass: f64, velocity: f64) -> Self {
        Self {
            mass,
            velocity,
            momentum: momentum(mass, velocity),
            kinetic_energy: kinetic_energy(mass, velocity),
        }
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        self.kinetic_energy
    }
}
