//! Python bindings for the children-game solver.
//!
//! # Quick Start
//!
//! ```python
//! import children_game as cg
//!
//! survivor, order = cg.solve(10, 2)
//! assert survivor == 5
//! assert order.tolist() == [2, 4, 6, 8, 10, 3, 7, 1, 9]
//!
//! solver = cg.Solver(strategy="indexed")
//! game_id, last_child, order = solver.play({"id": 1, "children_count": 5, "eliminate_each": 6})
//! ```

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{SolveError, SolverConfig};
use crate::service::{solve_game, GameData};
use crate::solver;

fn to_py_err(err: SolveError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a configured solver.
#[pyclass(name = "Solver")]
#[derive(Clone, Debug)]
pub struct PySolver(pub solver::Solver);

#[pymethods]
impl PySolver {
    /// Create a solver. `strategy` is "auto", "linked" or "indexed".
    #[new]
    #[pyo3(signature = (strategy = "auto", linked_interval_limit = 64))]
    fn new(strategy: &str, linked_interval_limit: u32) -> PyResult<Self> {
        let config = SolverConfig::from_name(strategy, linked_interval_limit)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self(solver::Solver::new(config)))
    }

    /// Solve a game. Returns `(survivor, order)` with `order` as a numpy array.
    fn solve<'py>(&self, py: Python<'py>, n: i32, k: i32) -> PyResult<(u32, Bound<'py, PyArray1<u32>>)> {
        let solution = self.0.solve(n, k).map_err(to_py_err)?;
        let order = PyArray1::from_vec_bound(py, solution.order_raw());
        Ok((solution.survivor.raw(), order))
    }

    /// Solve a game given as a `{id, children_count, eliminate_each}` dict.
    ///
    /// Returns `(id, last_child, order_of_elimination)`.
    fn play(&self, game: &Bound<'_, PyAny>) -> PyResult<(i64, u32, Vec<u32>)> {
        let data = GameData::new(
            game.get_item("id")?.extract()?,
            game.get_item("children_count")?.extract()?,
            game.get_item("eliminate_each")?.extract()?,
        );
        let result = solve_game(&data, &self.0).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok((
            result.id,
            result.last_child.raw(),
            result.order_of_elimination.iter().map(|p| p.raw()).collect(),
        ))
    }

    /// Name of the configured strategy.
    #[getter]
    fn strategy(&self) -> &'static str {
        self.0.config().strategy.name()
    }

    fn __repr__(&self) -> String {
        format!("Solver(strategy={:?})", self.0.config().strategy.name())
    }
}

/// Solve a game with the default configuration.
#[pyfunction]
fn solve<'py>(py: Python<'py>, n: i32, k: i32) -> PyResult<(u32, Bound<'py, PyArray1<u32>>)> {
    PySolver(solver::Solver::default()).solve(py, n, k)
}

/// Survivor only.
#[pyfunction]
fn survivor(n: i32, k: i32) -> PyResult<u32> {
    solver::survivor(n, k).map(|p| p.raw()).map_err(to_py_err)
}

/// children_game: counting-out game solver.
#[pymodule]
fn children_game(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySolver>()?;
    m.add_function(wrap_pyfunction!(solve, m)?)?;
    m.add_function(wrap_pyfunction!(survivor, m)?)?;
    Ok(())
}
