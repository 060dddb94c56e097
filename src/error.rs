//! Error types for the life game core engine

use thiserror::Error;

/// Main error type for the life game core engine
#[derive(Error, Debug)]
pub enum LifeGameError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "python")]
impl From<LifeGameError> for pyo3::PyErr {
    fn from(err: LifeGameError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyOSError, PyRuntimeError, PyValueError};

        match err {
            LifeGameError::InvalidInput(msg) => {
                PyValueError::new_err(format!("Invalid input: {}", msg))
            }
            LifeGameError::InvalidState(msg) => {
                PyRuntimeError::new_err(format!("Invalid state: {}", msg))
            }
            LifeGameError::InvalidCatalog(msg) => {
                PyValueError::new_err(format!("Invalid catalog: {}", msg))
            }
            LifeGameError::InvalidConfig(msg) => {
                PyValueError::new_err(format!("Invalid config: {}", msg))
            }
            LifeGameError::Io(e) => PyOSError::new_err(e.to_string()),
        }
    }
}

/// Result type alias for the life game core engine
pub type Result<T> = std::result::Result<T, LifeGameError>;
