//! Caller-side layer around the calculator: collision-type labels, the input
//! range policy, request validation, and the preset scenario catalog.

pub mod kind;
pub mod limits;
pub mod presets;
pub mod request;

pub use kind::CollisionKind;
pub use limits::Limits;
pub use presets::{PresetCatalog, PresetScenario};
pub use request::{ParticleInput, SimulationRequest};
