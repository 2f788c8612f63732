//! Python extension module (`python` feature).
//!
//! ```python
//! import crashcourse
//! out = crashcourse.simulate(1.0, 5.0, 1.0, -5.0, 1.0)
//! out["particle1_final"]["velocity"]  # -5.0
//! ```

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{BodyState, CollisionOutcome};
use crate::error::Error;
use crate::scenario::{
    CollisionKind, Limits, ParticleInput, PresetCatalog, PresetScenario, SimulationRequest,
};

fn py_err(e: Error) -> PyErr {
    match e {
        Error::UnknownPreset(_) => PyKeyError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

impl From<Error> for PyErr {
    fn from(e: Error) -> Self {
        py_err(e)
    }
}

fn body_dict<'py>(py: Python<'py>, s: &BodyState) -> PyResult<Bound<'py, PyDict>> {
    let d = PyDict::new(py);
    d.set_item("mass", s.mass())?;
    d.set_item("velocity", s.velocity())?;
    d.set_item("momentum", s.momentum())?;
    d.set_item("kinetic_energy", s.kinetic_energy())?;
    Ok(d)
}

fn outcome_dict<'py>(py: Python<'py>, out: &CollisionOutcome) -> PyResult<Bound<'py, PyDict>> {
    let d = PyDict::new(py);
    d.set_item("particle1_initial", body_dict(py, out.body1_initial())?)?;
    d.set_item("particle2_initial", body_dict(py, out.body2_initial())?)?;
    d.set_item("particle1_final", body_dict(py, out.body1_final())?)?;
    d.set_item("particle2_final", body_dict(py, out.body2_final())?)?;
    d.set_item("total_momentum_initial", out.total_momentum_initial())?;
    d.set_item("total_momentum_final", out.total_momentum_final())?;
    d.set_item("total_kinetic_energy_initial", out.total_kinetic_energy_initial())?;
    d.set_item("total_kinetic_energy_final", out.total_kinetic_energy_final())?;
    d.set_item("kinetic_energy_change", out.kinetic_energy_change())?;
    d.set_item("coefficient_of_restitution", out.coefficient_of_restitution())?;
    Ok(d)
}

fn particle_dict<'py>(py: Python<'py>, p: &ParticleInput) -> PyResult<Bound<'py, PyDict>> {
    let d = PyDict::new(py);
    d.set_item("mass", p.mass)?;
    d.set_item("velocity", p.velocity)?;
    Ok(d)
}

fn preset_dict<'py>(py: Python<'py>, p: &PresetScenario) -> PyResult<Bound<'py, PyDict>> {
    let d = PyDict::new(py);
    d.set_item("name", &p.name)?;
    d.set_item("slug", p.slug())?;
    d.set_item("description", &p.description)?;
    d.set_item("particle1", particle_dict(py, &p.particle1)?)?;
    d.set_item("particle2", particle_dict(py, &p.particle2)?)?;
    d.set_item("coefficient_of_restitution", p.coefficient_of_restitution)?;
    d.set_item("collision_type", p.collision_type.as_str())?;
    Ok(d)
}

/// Simulate one collision with no range policy.
///
/// Raises ValueError on non-positive masses or e outside [0, 1].
#[pyfunction]
#[pyo3(signature = (m1, v1, m2, v2, e=1.0))]
fn simulate<'py>(
    py: Python<'py>,
    m1: f64,
    v1: f64,
    m2: f64,
    v2: f64,
    e: f64,
) -> PyResult<Bound<'py, PyDict>> {
    let out = crate::core::simulate(m1, v1, m2, v2, e)?;
    outcome_dict(py, &out)
}

/// Simulate a labelled request under the default range policy.
///
/// `collision_type` is "elastic", "inelastic", or anything else to use
/// `coefficient_of_restitution` as given.
#[pyfunction]
#[pyo3(signature = (
    p1_mass,
    p1_velocity,
    p2_mass,
    p2_velocity,
    coefficient_of_restitution=1.0,
    collision_type="elastic"
))]
fn simulate_request<'py>(
    py: Python<'py>,
    p1_mass: f64,
    p1_velocity: f64,
    p2_mass: f64,
    p2_velocity: f64,
    coefficient_of_restitution: f64,
    collision_type: &str,
) -> PyResult<Bound<'py, PyDict>> {
    let request = SimulationRequest::new(
        ParticleInput::new(p1_mass, p1_velocity),
        ParticleInput::new(p2_mass, p2_velocity),
        coefficient_of_restitution,
        CollisionKind::from(collision_type),
    );
    let out = request.run(&Limits::default())?;
    outcome_dict(py, &out)
}

/// Return the builtin preset scenarios as a list of dicts.
#[pyfunction]
fn presets<'py>(py: Python<'py>) -> PyResult<Vec<Bound<'py, PyDict>>> {
    PresetCatalog::builtin()
        .all()
        .iter()
        .map(|p| preset_dict(py, p))
        .collect()
}

/// Return one preset by slug; raises KeyError if absent.
#[pyfunction]
fn preset<'py>(py: Python<'py>, slug: &str) -> PyResult<Bound<'py, PyDict>> {
    let catalog = PresetCatalog::builtin();
    let p = catalog.find(slug)?;
    preset_dict(py, p)
}

/// The crashcourse Python module entry point.
#[pymodule]
fn crashcourse(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_request, m)?)?;
    m.add_function(wrap_pyfunction!(presets, m)?)?;
    m.add_function(wrap_pyfunction!(preset, m)?)?;
    Ok(())
}
