use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Named collision type chosen by the caller.
///
/// Only a shorthand for a restitution value; the calculator never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CollisionKind {
    /// e = 1
    #[default]
    Elastic,
    /// e = 0
    Inelastic,
    /// e taken from the request
    Custom,
}

impl CollisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionKind::Elastic => "elastic",
            CollisionKind::Inelastic => "inelastic",
            CollisionKind::Custom => "custom",
        }
    }

    /// Restitution coefficient for this kind; `requested` is used only by `Custom`.
    pub fn restitution(&self, requested: f64) -> f64 {
        match self {
            CollisionKind::Elastic => 1.0,
            CollisionKind::Inelastic => 0.0,
            CollisionKind::Custom => requested,
        }
    }
}

impl From<&str> for CollisionKind {
    fn from(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "elastic" => CollisionKind::Elastic,
            "inelastic" => CollisionKind::Inelastic,
            _ => CollisionKind::Custom,
        }
    }
}

impl From<String> for CollisionKind {
    fn from(label: String) -> Self {
        CollisionKind::from(label.as_str())
    }
}

impl FromStr for CollisionKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CollisionKind::from(s))
    }
}

impl fmt::Display for CollisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
