use crate::core::{simulate, CollisionOutcome};
use crate::error::{Error, Result};
use crate::scenario::{CollisionKind, Limits};
use serde::{Deserialize, Serialize};

/// Mass and velocity supplied for one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleInput {
    pub mass: f64,
    pub velocity: f64,
}

impl ParticleInput {
    pub fn new(mass: f64, velocity: f64) -> Self {
        Self { mass, velocity }
    }
}

fn default_restitution() -> f64 {
    1.0
}

/// A collision request as received from an outer surface.
///
/// `collision_type` wins over `coefficient_of_restitution` unless it is `custom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub particle1: ParticleInput,
    pub particle2: ParticleInput,
    #[serde(default = "default_restitution")]
    pub coefficient_of_restitution: f64,
    #[serde(default)]
    pub collision_type: CollisionKind,
}

impl SimulationRequest {
    pub fn new(
        particle1: ParticleInput,
        particle2: ParticleInput,
        coefficient_of_restitution: f64,
        collision_type: CollisionKind,
    ) -> Self {
        Self {
            particle1,
            particle2,
            coefficient_of_restitution,
            collision_type,
        }
    }

    fn check_requested_restitution(&self) -> Result<()> {
        let e = self.coefficient_of_restitution;
        if !(0.0..=1.0).contains(&e) {
            return Err(Error::InvalidRestitution(e));
        }
        Ok(())
    }

    /// Restitution actually used once the label is applied.
    pub fn resolve_restitution(&self) -> f64 {
        self.collision_type.restitution(self.coefficient_of_restitution)
    }

    /// Validate against `limits` and run the calculator.
    ///
    /// The requested coefficient must lie in [0, 1] even when the label overrides it.
    pub fn run(&self, limits: &Limits) -> Result<CollisionOutcome> {
        let checked = limits
            .check(self.particle1.mass, self.particle1.velocity)
            .and_then(|()| limits.check(self.particle2.mass, self.particle2.velocity))
            .and_then(|()| self.check_requested_restitution());
        if let Err(e) = checked {
            log::warn!("rejected collision request: {e}");
            return Err(e);
        }

        let e = self.resolve_restitution();
        simulate(
            self.particle1.mass,
            self.particle1.velocity,
            self.particle2.mass,
            self.particle2.velocity,
            e,
        )
        .inspect_err(|err| log::warn!("collision request failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(e: f64, kind: CollisionKind) -> SimulationRequest {
        SimulationRequest::new(
            ParticleInput::new(2.0, 6.0),
            ParticleInput::new(1.0, -2.0),
            e,
            kind,
        )
    }

    #[test]
    fn label_selects_restitution() {
        assert_eq!(req(0.4, CollisionKind::Elastic).resolve_restitution(), 1.0);
        assert_eq!(req(0.4, CollisionKind::Inelastic).resolve_restitution(), 0.0);
        assert_eq!(req(0.4, CollisionKind::Custom).resolve_restitution(), 0.4);
    }

    #[test]
    fn run_uses_resolved_restitution() -> Result<()> {
        let out = req(0.4, CollisionKind::Inelastic).run(&Limits::default())?;
        assert_eq!(out.coefficient_of_restitution(), 0.0);
        assert_eq!(out.body1_final().velocity(), out.body2_final().velocity());
        Ok(())
    }

    #[test]
    fn custom_restitution_still_validated() {
        let err = req(1.5, CollisionKind::Custom)
            .run(&Limits::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRestitution(_)));
    }

    #[test]
    fn requested_restitution_checked_under_any_label() {
        for kind in [CollisionKind::Elastic, CollisionKind::Inelastic] {
            let err = req(5.0, kind).run(&Limits::default()).unwrap_err();
            assert!(matches!(err, Error::InvalidRestitution(e) if e == 5.0));
            let err = req(-3.0, kind).run(&Limits::default()).unwrap_err();
            assert!(matches!(err, Error::InvalidRestitution(_)));
            let err = req(f64::NAN, kind).run(&Limits::default()).unwrap_err();
            assert!(matches!(err, Error::InvalidRestitution(e) if e.is_nan()));
        }
    }

    #[test]
    fn boundary_restitution_accepted_under_any_label() -> Result<()> {
        for e in [0.0, 1.0] {
            req(e, CollisionKind::Elastic).run(&Limits::default())?;
            req(e, CollisionKind::Inelastic).run(&Limits::default())?;
        }
        Ok(())
    }

    #[test]
    fn range_policy_applies_to_both_particles() {
        let mut r = req(1.0, CollisionKind::Elastic);
        r.particle2.velocity = -25.0;
        assert!(matches!(r.run(&Limits::default()), Err(Error::OutOfRange(_))));
        assert!(r.run(&Limits::unbounded()).is_ok());
    }

    #[test]
    fn nonpositive_mass_surfaces_as_invalid_mass() {
        let mut r = req(1.0, CollisionKind::Elastic);
        r.particle1.mass = 0.0;
        assert!(matches!(r.run(&Limits::default()), Err(Error::InvalidMass { .. })));
    }

    #[test]
    fn json_defaults_to_elastic() -> Result<()> {
        let r: SimulationRequest = serde_json::from_str(
            r#"{ "particle1": { "mass": 1.0, "velocity": 5.0 },
                 "particle2": { "mass": 1.0, "velocity": -5.0 } }"#,
        )?;
        assert_eq!(r.collision_type, CollisionKind::Elastic);
        assert_eq!(r.coefficient_of_restitution, 1.0);
        Ok(())
    }

    #[test]
    fn json_missing_particle_is_parse_error() {
        let r: std::result::Result<SimulationRequest, _> =
            serde_json::from_str(r#"{ "particle1": { "mass": 1.0, "velocity": 5.0 } }"#);
        assert!(r.is_err());
    }
}
