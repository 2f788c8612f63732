use crate::core::CollisionOutcome;
use crate::error::{Error, Result};
use crate::scenario::{CollisionKind, Limits, ParticleInput, SimulationRequest};
use serde::{Deserialize, Serialize};

/// A named, ready-to-run collision setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetScenario {
    pub name: String,
    pub description: String,
    pub particle1: ParticleInput,
    pub particle2: ParticleInput,
    pub coefficient_of_restitution: f64,
    pub collision_type: CollisionKind,
}

impl PresetScenario {
    /// URL-style identifier: lowercase name with spaces replaced by `-`.
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }

    pub fn request(&self) -> SimulationRequest {
        SimulationRequest::new(
            self.particle1,
            self.particle2,
            self.coefficient_of_restitution,
            self.collision_type,
        )
    }

    /// Run the preset the same way an incoming request would be run.
    pub fn run(&self, limits: &Limits) -> Result<CollisionOutcome> {
        self.request().run(limits)
    }
}

fn preset(
    name: &str,
    description: &str,
    p1: (f64, f64),
    p2: (f64, f64),
    e: f64,
    kind: CollisionKind,
) -> PresetScenario {
    PresetScenario {
        name: name.to_string(),
        description: description.to_string(),
        particle1: ParticleInput::new(p1.0, p1.1),
        particle2: ParticleInput::new(p2.0, p2.1),
        coefficient_of_restitution: e,
        collision_type: kind,
    }
}

/// Ordered collection of preset scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetCatalog {
    presets: Vec<PresetScenario>,
}

impl PresetCatalog {
    pub fn new(presets: Vec<PresetScenario>) -> Self {
        Self { presets }
    }

    /// The five stock scenarios.
    pub fn builtin() -> Self {
        use CollisionKind::{Elastic, Inelastic};
        Self::new(vec![
            preset(
                "Equal Mass – Head-On",
                "Two particles of equal mass colliding head-on",
                (1.0, 5.0),
                (1.0, -5.0),
                1.0,
                Elastic,
            ),
            preset(
                "Heavy vs Light",
                "Heavy particle colliding with lighter one",
                (2.0, 3.0),
                (0.5, 0.0),
                1.0,
                Elastic,
            ),
            preset(
                "Perfectly Inelastic",
                "Two particles sticking together after collision",
                (1.5, 8.0),
                (1.0, -2.0),
                0.0,
                Inelastic,
            ),
            preset(
                "Partial Inelastic",
                "Collision with some energy loss",
                (1.2, 6.0),
                (0.8, -3.0),
                0.5,
                Inelastic,
            ),
            preset(
                "Stationary Target",
                "Moving particle hits stationary target",
                (1.0, 10.0),
                (1.5, 0.0),
                1.0,
                Elastic,
            ),
        ])
    }

    /// Parse a catalog from a JSON array of presets.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let catalog: PresetCatalog = serde_json::from_str(text)?;
        log::info!("loaded {} preset scenarios", catalog.len());
        Ok(catalog)
    }

    pub fn all(&self) -> &[PresetScenario] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Look up a preset by slug, ignoring case.
    pub fn find(&self, slug: &str) -> Result<&PresetScenario> {
        let wanted = slug.to_lowercase();
        self.presets
            .iter()
            .find(|p| p.slug() == wanted)
            .ok_or_else(|| Error::UnknownPreset(slug.to_string()))
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
