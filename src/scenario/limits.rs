use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Caller-side range policy applied before a request reaches the calculator.
///
/// Mass positivity is left to the calculator so that non-positive masses
/// surface as `Error::InvalidMass` on every path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Largest accepted mass (kg).
    pub mass_max: f64,
    /// Smallest accepted velocity (m/s).
    pub velocity_min: f64,
    /// Largest accepted velocity (m/s).
    pub velocity_max: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            mass_max: 2.0,
            velocity_min: -20.0,
            velocity_max: 20.0,
        }
    }
}

impl Limits {
    /// No range restrictions; only finiteness is still required.
    pub fn unbounded() -> Self {
        Self {
            mass_max: f64::INFINITY,
            velocity_min: f64::NEG_INFINITY,
            velocity_max: f64::INFINITY,
        }
    }

    /// Parse limits from JSON; missing fields keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let limits: Limits = serde_json::from_str(text)?;
        if limits.velocity_min > limits.velocity_max {
            return Err(Error::OutOfRange(format!(
                "velocity_min ({}) must not exceed velocity_max ({})",
                limits.velocity_min, limits.velocity_max
            )));
        }
        Ok(limits)
    }

    /// Check one body's inputs against the policy.
    pub fn check(&self, mass: f64, velocity: f64) -> Result<()> {
        if !mass.is_finite() {
            return Err(Error::OutOfRange("mass must be finite".into()));
        }
        if !velocity.is_finite() {
            return Err(Error::OutOfRange("velocity must be finite".into()));
        }
        if mass > self.mass_max {
            return Err(Error::OutOfRange(format!(
                "mass {mass} exceeds maximum {}",
                self.mass_max
            )));
        }
        if velocity < self.velocity_min || velocity > self.velocity_max {
            return Err(Error::OutOfRange(format!(
                "velocity {velocity} outside [{}, {}]",
                self.velocity_min, self.velocity_max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_accept_typical_inputs() -> Result<()> {
        let limits = Limits::default();
        limits.check(1.0, 5.0)?;
        limits.check(2.0, -20.0)?;
        limits.check(0.1, 20.0)?;
        Ok(())
    }

    #[test]
    fn defaults_reject_out_of_range() {
        let limits = Limits::default();
        let err = limits.check(2.5, 0.0).unwrap_err();
        assert!(err.to_string().contains("mass"));
        let err = limits.check(1.0, 25.0).unwrap_err();
        assert!(err.to_string().contains("velocity"));
        assert!(matches!(limits.check(1.0, -20.5), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn non_finite_rejected_even_when_unbounded() {
        let limits = Limits::unbounded();
        assert!(limits.check(1e300, -1e300).is_ok());
        assert!(matches!(limits.check(f64::NAN, 1.0), Err(Error::OutOfRange(_))));
        assert!(matches!(limits.check(1.0, f64::INFINITY), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn nonpositive_mass_left_to_calculator() {
        assert!(Limits::default().check(-1.0, 0.0).is_ok());
    }

    #[test]
    fn json_fills_missing_fields_from_default() -> Result<()> {
        let limits = Limits::from_json_str(r#"{ "mass_max": 10.0 }"#)?;
        assert_eq!(limits.mass_max, 10.0);
        assert_eq!(limits.velocity_min, -20.0);
        assert_eq!(limits.velocity_max, 20.0);
        Ok(())
    }

    #[test]
    fn json_rejects_inverted_velocity_range() {
        let err = Limits::from_json_str(r#"{ "velocity_min": 5.0, "velocity_max": 1.0 }"#)
            .unwrap_err();
        assert!(matches!(err, Error::OutOfRange(_)));
        assert!(matches!(Limits::from_json_str("[1, 2]"), Err(Error::Parse(_))));
    }
}
