use crate::core::body::BodyState;
use crate::error::{Error, Result};
use serde::Serialize;

/// Before/after record of one simulated two-body collision.
///
/// Produced only by [`simulate`]; all fields are read-only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollisionOutcome {
    #[serde(rename = "particle1_initial")]
    body1_initial: BodyState,
    #[serde(rename = "particle2_initial")]
    body2_initial: BodyState,
    #[serde(rename = "particle1_final")]
    body1_final: BodyState,
    #[serde(rename = "particle2_final")]
    body2_final: BodyState,
    total_momentum_initial: f64,
    total_momentum_final: f64,
    total_kinetic_energy_initial: f64,
    total_kinetic_energy_final: f64,
    kinetic_energy_change: f64,
    coefficient_of_restitution: f64,
}

impl CollisionOutcome {
    pub fn body1_initial(&self) -> &BodyState {
        &self.body1_initial
    }

    pub fn body2_initial(&self) -> &BodyState {
        &self.body2_initial
    }

    pub fn body1_final(&self) -> &BodyState {
        &self.body1_final
    }

    pub fn body2_final(&self) -> &BodyState {
        &self.body2_final
    }

    pub fn total_momentum_initial(&self) -> f64 {
        self.total_momentum_initial
    }

    pub fn total_momentum_final(&self) -> f64 {
        self.total_momentum_final
    }

    pub fn total_kinetic_energy_initial(&self) -> f64 {
        self.total_kinetic_energy_initial
    }

    pub fn total_kinetic_energy_final(&self) -> f64 {
        self.total_kinetic_energy_final
    }

    /// Final minus initial total kinetic energy (≤ 0 for e in [0, 1]).
    pub fn kinetic_energy_change(&self) -> f64 {
        self.kinetic_energy_change
    }

    pub fn coefficient_of_restitution(&self) -> f64 {
        self.coefficient_of_restitution
    }

    /// Absolute drift between total momentum before and after.
    pub fn momentum_error(&self) -> f64 {
        (self.total_momentum_final - self.total_momentum_initial).abs()
    }

    /// Fraction of the initial kinetic energy left after the collision.
    ///
    /// Returns 1.0 when nothing was moving.
    pub fn energy_retained(&self) -> f64 {
        if self.total_kinetic_energy_initial == 0.0 {
            return 1.0;
        }
        self.total_kinetic_energy_final / self.total_kinetic_energy_initial
    }

    pub fn is_elastic(&self) -> bool {
        self.coefficient_of_restitution == 1.0
    }
}

/// Post-collision velocities for a head-on collision along the line of centers.
///
/// With `M = m1 + m2`, `P = m1 v1 + m2 v2` and `dv = v1 - v2`:
///
/// ```text
/// v1' = (P - m2 e dv) / M
/// v2' = (P + m1 e dv) / M
/// ```
///
/// e = 1 gives the elastic solution and e = 0 the common velocity `P / M`.
///
/// Errors:
/// - `Error::InvalidMass` if either mass is not > 0 (checked first).
/// - `Error::InvalidRestitution` if `e` is outside [0, 1].
///
/// NaN fails both comparisons and is rejected accordingly.
pub fn final_velocities(m1: f64, v1: f64, m2: f64, v2: f64, e: f64) -> Result<(f64, f64)> {
    if !(m1 > 0.0 && m2 > 0.0) {
        return Err(Error::InvalidMass { m1, m2 });
    }
    if !(0.0..=1.0).contains(&e) {
        return Err(Error::InvalidRestitution(e));
    }

    let total_mass = m1 + m2;
    let total_momentum = m1 * v1 + m2 * v2;
    let approach = v1 - v2;

    let v1_final = (total_momentum - m2 * e * approach) / total_mass;
    let v2_final = (total_momentum + m1 * e * approach) / total_mass;
    Ok((v1_final, v2_final))
}

/// Simulate one collision and collect the before/after quantities.
///
/// Masses are unchanged by the collision. Input errors from [`final_velocities`]
/// are returned before any state is built.
pub fn simulate(m1: f64, v1: f64, m2: f64, v2: f64, e: f64) -> Result<CollisionOutcome> {
    let (v1_final, v2_final) = final_velocities(m1, v1, m2, v2, e)?;

    let body1_initial = BodyState::new(m1, v1);
    let body2_initial = BodyState::new(m2, v2);
    let body1_final = BodyState::new(m1, v1_final);
    let body2_final = BodyState::new(m2, v2_final);

    let total_momentum_initial = body1_initial.momentum() + body2_initial.momentum();
    let total_momentum_final = body1_final.momentum() + body2_final.momentum();
    let total_kinetic_energy_initial =
        body1_initial.kinetic_energy() + body2_initial.kinetic_energy();
    let total_kinetic_energy_final = body1_final.kinetic_energy() + body2_final.kinetic_energy();
    let kinetic_energy_change = total_kinetic_energy_final - total_kinetic_energy_initial;

    log::debug!(
        "collision m1={m1} v1={v1} m2={m2} v2={v2} e={e} -> v1'={v1_final} v2'={v2_final} dKE={kinetic_energy_change}"
    );

    Ok(CollisionOutcome {
        body1_initial,
        body2_initial,
        body1_final,
        body2_final,
        total_momentum_initial,
        total_momentum_final,
        total_kinetic_energy_initial,
        total_kinetic_energy_final,
        kinetic_energy_change,
        coefficient_of_restitution: e,
    })
}
