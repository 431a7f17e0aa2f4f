use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::particle::DIM;
use crate::core::{Simulation, Viewport};
use crate::SimConfig;

fn py_err<E: ToString>(e: E) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// ParticleSim: Python-facing wrapper around the Rust Simulation core.
///
/// API:
/// - __new__(num_particles=750, width=640, height=480, seed=None, capacity=2000,
///           pass_mode="double_visit", response_mode="axis_aligned")
/// - step(frames=1)
/// - get_positions() -> np.ndarray, shape (N, 2)
/// - get_velocities() -> np.ndarray, shape (N, 2)
#[pyclass]
pub struct ParticleSim {
    sim: Simulation,
}

impl ParticleSim {
    fn read_pairs(&self, arr: &PyReadonlyArray2<'_, f64>, what: &str) -> PyResult<Vec<[f64; DIM]>> {
        let arr = arr.as_array();
        let n = self.sim.num_particles();
        if arr.shape()[0] != n || arr.shape()[1] != DIM {
            return Err(py_err(format!(
                "{} must have shape ({}, {}), got {:?}",
                what,
                n,
                DIM,
                arr.shape()
            )));
        }
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let pair = [arr[[i, 0]], arr[[i, 1]]];
            if !pair.iter().all(|x| x.is_finite()) {
                return Err(py_err(format!("{what} values must be finite")));
            }
            out.push(pair);
        }
        Ok(out)
    }

    fn to_array(rows: Vec<[f64; DIM]>) -> Array2<f64> {
        let mut arr = Array2::<f64>::zeros((rows.len(), DIM));
        for (i, row) in rows.into_iter().enumerate() {
            for k in 0..DIM {
                arr[[i, k]] = row[k];
            }
        }
        arr
    }
}

#[pymethods]
impl ParticleSim {
    /// Seed a new simulation of discs (mass 1, radius 2) in a width x height viewport.
    ///
    /// Errors: raises ValueError on invalid parameters or unknown mode names.
    #[new]
    #[pyo3(signature = (
        num_particles=750,
        width=640,
        height=480,
        seed=None,
        capacity=2000,
        pass_mode="double_visit",
        response_mode="axis_aligned"
    ))]
    fn new(
        num_particles: usize,
        width: u32,
        height: u32,
        seed: Option<u64>,
        capacity: usize,
        pass_mode: &str,
        response_mode: &str,
    ) -> PyResult<Self> {
        let cfg = SimConfig {
            particles: num_particles,
            capacity,
            width,
            height,
            seed,
            pass_mode: pass_mode.parse().map_err(py_err)?,
            response_mode: response_mode.parse().map_err(py_err)?,
            ..SimConfig::default()
        };
        let sim = cfg.build().map_err(py_err)?;
        Ok(Self { sim })
    }

    /// Advance `frames` ticks (releases the GIL during computation).
    #[pyo3(signature = (frames=1))]
    fn step(&mut self, py: Python<'_>, frames: u64) -> PyResult<()> {
        py.detach(|| self.sim.advance(frames)).map_err(py_err)
    }

    /// Move the walls to a new viewport size.
    fn resize(&mut self, width: u32, height: u32) -> PyResult<()> {
        let vp = Viewport::new(width, height).map_err(py_err)?;
        self.sim.set_viewport(vp);
        Ok(())
    }

    /// Number of completed ticks.
    fn frame(&self) -> u64 {
        self.sim.frame()
    }

    fn num_particles(&self) -> usize {
        self.sim.num_particles()
    }

    /// Return positions as a NumPy array of shape (N, 2), dtype=float64.
    fn get_positions<'py>(&self, py: Python<'py>) -> PyResult<Py<PyArray2<f64>>> {
        let arr = Self::to_array(self.sim.positions());
        Ok(arr.into_pyarray(py).unbind())
    }

    /// Return velocities as a NumPy array of shape (N, 2), dtype=float64.
    fn get_velocities<'py>(&self, py: Python<'py>) -> PyResult<Py<PyArray2<f64>>> {
        let arr = Self::to_array(self.sim.velocities());
        Ok(arr.into_pyarray(py).unbind())
    }

    /// Set all particle positions from a NumPy array of shape (N, 2).
    fn set_positions<'py>(&mut self, positions: PyReadonlyArray2<'py, f64>) -> PyResult<()> {
        let rows = self.read_pairs(&positions, "positions")?;
        for (p, r) in self.sim.population_mut().as_mut_slice().iter_mut().zip(rows) {
            p.set_position(r).map_err(py_err)?;
        }
        Ok(())
    }

    /// Set all particle velocities from a NumPy array of shape (N, 2).
    fn set_velocities<'py>(&mut self, velocities: PyReadonlyArray2<'py, f64>) -> PyResult<()> {
        let rows = self.read_pairs(&velocities, "velocities")?;
        for (p, v) in self.sim.population_mut().as_mut_slice().iter_mut().zip(rows) {
            p.set_velocity(v).map_err(py_err)?;
        }
        Ok(())
    }

    /// Total kinetic energy.
    fn kinetic_energy(&self) -> f64 {
        self.sim.kinetic_energy()
    }

    /// Total momentum as (px, py).
    fn momentum(&self) -> (f64, f64) {
        let [px, py] = self.sim.momentum();
        (px, py)
    }
}

/// The discsim Python module entry point.
#[pymodule]
fn discsim(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ParticleSim>()?;
    Ok(())
}
