//! Python bindings
//!
//! Exposes catalog initialization and a `LifeGame` class that holds one
//! session in Rust memory.

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use std::sync::Arc;

use crate::config::{bundled_catalog, load_catalog_str, load_rules_str, GameRules};
use crate::error::LifeGameError;
use crate::event::FixedPick;
use crate::simulator::render::{render_log, render_status};
use crate::simulator::{LifeGame, LogEntry, RollDriver, TurnEngine};

// ============================================================================
// Cached Configuration
// ============================================================================

/// Engine shared by every session created after `init_catalog`
static CACHED_ENGINE: OnceCell<RwLock<Arc<TurnEngine>>> = OnceCell::new();

fn cached_engine() -> PyResult<Arc<TurnEngine>> {
    CACHED_ENGINE
        .get()
        .map(|engine| engine.read().clone())
        .ok_or_else(|| {
            PyRuntimeError::new_err("Catalog not initialized. Call init_catalog() first.")
        })
}

// ============================================================================
// Helper Functions
// ============================================================================

fn entry_to_dict<'py>(py: Python<'py>, entry: &LogEntry) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("id", entry.id)?;
    dict.set_item("die", entry.die)?;
    dict.set_item("day", entry.day)?;
    dict.set_item("age_years", entry.age_years)?;
    dict.set_item("age_days", entry.age_days)?;
    dict.set_item("money_after", entry.money_after)?;
    dict.set_item("employment_after", entry.employment_after.as_deref())?;
    dict.set_item("items_after", &entry.items_after)?;
    dict.set_item("companions_after", &entry.companions_after)?;

    match entry.event {
        Some(ref event) => {
            let event_dict = PyDict::new(py);
            event_dict.set_item("title", &event.title)?;
            event_dict.set_item("from", event.age_from)?;
            event_dict.set_item("to", event.age_to)?;
            event_dict.set_item("money", event.money_delta)?;
            event_dict.set_item("get", event.granted())?;
            event_dict.set_item("lost", event.removed())?;
            event_dict.set_item("employment", event.employment())?;
            event_dict.set_item("unemployment", event.clears_employment)?;
            event_dict.set_item("join", event.joined())?;
            event_dict.set_item("leave", event.departed())?;
            dict.set_item("event", event_dict)?;
        }
        None => dict.set_item("event", py.None())?,
    }

    Ok(dict)
}

// ============================================================================
// Python Functions
// ============================================================================

/// Initialize the event catalog and rules (call once at startup)
///
/// # Arguments
/// * `events_json` - Catalog JSON; the bundled catalog is used when omitted
/// * `rules_toml` - Rules TOML; defaults (365 days, 30 years, d600) when omitted
#[pyfunction]
#[pyo3(signature = (events_json=None, rules_toml=None))]
fn init_catalog(events_json: Option<&str>, rules_toml: Option<&str>) -> PyResult<()> {
    let catalog = match events_json {
        Some(json) => load_catalog_str(json)?,
        None => bundled_catalog().clone(),
    };
    let rules = match rules_toml {
        Some(content) => load_rules_str(content)?,
        None => GameRules::default(),
    };
    let engine = Arc::new(TurnEngine::new(catalog, rules)?);

    if let Some(existing) = CACHED_ENGINE.get() {
        *existing.write() = engine;
    } else {
        let _ = CACHED_ENGINE.set(RwLock::new(engine));
    }

    Ok(())
}

/// Check if the catalog is initialized
#[pyfunction]
fn is_catalog_initialized() -> bool {
    CACHED_ENGINE.get().is_some()
}

// ============================================================================
// LifeGame PyClass
// ============================================================================

/// One player's session
#[pyclass(name = "LifeGame")]
pub struct PyLifeGame {
    driver: RollDriver,
}

#[pymethods]
impl PyLifeGame {
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> PyResult<Self> {
        let engine = cached_engine()?;
        let game = match seed {
            Some(seed) => LifeGame::with_seed(engine, seed),
            None => LifeGame::new(engine),
        };
        Ok(Self {
            driver: RollDriver::new(game),
        })
    }

    // ------------------------------------------------------------------------
    // Getter Properties
    // ------------------------------------------------------------------------

    #[getter]
    fn elapsed_days(&self) -> i32 {
        self.driver.lock().state().elapsed_days
    }

    #[getter]
    fn age_years(&self) -> i32 {
        let game = self.driver.lock();
        game.state().age_years(game.engine().rules())
    }

    #[getter]
    fn age_days(&self) -> i32 {
        let game = self.driver.lock();
        game.state().age_days(game.engine().rules())
    }

    #[getter]
    fn money(&self) -> i64 {
        self.driver.lock().state().money
    }

    #[getter]
    fn employment(&self) -> Option<String> {
        self.driver.lock().state().employment.clone()
    }

    #[getter]
    fn items(&self) -> Vec<String> {
        self.driver.lock().state().items.clone()
    }

    #[getter]
    fn companions(&self) -> Vec<String> {
        self.driver.lock().state().companions.clone()
    }

    #[getter]
    fn turn_count(&self) -> u32 {
        self.driver.lock().state().turn_count
    }

    #[getter]
    fn finished(&self) -> bool {
        self.driver.lock().state().finished
    }

    #[getter]
    fn can_roll(&self) -> bool {
        self.driver.can_roll()
    }

    // ------------------------------------------------------------------------
    // Turns
    // ------------------------------------------------------------------------

    /// Roll immediately and return the new log entry as a dict
    fn roll<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let entry = self.driver.lock().roll()?;
        entry_to_dict(py, &entry)
    }

    /// Resolve a turn with an explicit die value and event index
    fn roll_with<'py>(&self, py: Python<'py>, die: i64, index: i64) -> PyResult<Bound<'py, PyDict>> {
        let die = i32::try_from(die).map_err(|_| {
            LifeGameError::InvalidInput(format!("die value {} out of range", die))
        })?;
        let index = usize::try_from(index).map_err(|_| {
            LifeGameError::InvalidInput(format!("selection index {} is negative", index))
        })?;
        let entry = self.driver.lock().roll_with(die, &mut FixedPick(index))?;
        entry_to_dict(py, &entry)
    }

    /// Roll after the configured delay; resolves to the entry dict, same
    /// shape as `roll()`
    fn roll_async<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyAny>> {
        let driver = self.driver.clone();
        pyo3_async_runtimes::tokio::future_into_py(py, async move {
            let entry = driver.roll().await?;
            Python::attach(|py| entry_to_dict(py, &entry).map(Bound::unbind))
        })
    }

    fn reset(&self) {
        self.driver.reset();
    }

    // ------------------------------------------------------------------------
    // Log Access
    // ------------------------------------------------------------------------

    /// Log entries as dicts, newest first
    fn get_log<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyList>> {
        let game = self.driver.lock();
        let list = PyList::empty(py);
        for entry in game.log().iter() {
            list.append(entry_to_dict(py, entry)?)?;
        }
        Ok(list)
    }

    fn log_json(&self) -> PyResult<String> {
        serde_json::to_string(self.driver.lock().log())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Status panel text
    fn status_text(&self) -> String {
        let game = self.driver.lock();
        render_status(game.state(), game.engine().rules())
    }

    /// Log text, newest first
    fn display_text(&self) -> String {
        render_log(self.driver.lock().log())
    }
}

// ============================================================================
// Python Module Definition
// ============================================================================

#[pymodule]
fn life_game_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_catalog, m)?)?;
    m.add_function(wrap_pyfunction!(is_catalog_initialized, m)?)?;
    m.add_class::<PyLifeGame>()?;
    Ok(())
}
