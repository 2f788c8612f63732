use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type shared by the calculator and the scenario layer.
///
/// The calculator only ever produces `InvalidMass` and `InvalidRestitution`;
/// the remaining variants come from input policy and configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    /// One or both masses are not strictly positive.
    #[error("masses must be positive (m1={m1}, m2={m2})")]
    InvalidMass { m1: f64, m2: f64 },

    /// Coefficient of restitution outside [0, 1].
    #[error("coefficient of restitution must be between 0 and 1 (got {0})")]
    InvalidRestitution(f64),

    /// Input rejected by the caller-side range policy.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// No preset scenario matches the requested slug.
    #[error("preset '{0}' not found")]
    UnknownPreset(String),

    /// Malformed JSON configuration or catalog.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}
