//! Python bindings for vinefilter
//!
//! This module provides PyO3-based Python bindings for the Rust core.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

use crate::dataset::Dataset;
use crate::dependency::Role;
use crate::error::{DatasetError, VineError};
use crate::vine::Vine as RustVine;

impl From<VineError> for PyErr {
    fn from(err: VineError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

impl From<DatasetError> for PyErr {
    fn from(err: DatasetError) -> PyErr {
        match err {
            DatasetError::Io(e) => PyIOError::new_err(e.to_string()),
            e @ DatasetError::FileOpen { .. } => PyIOError::new_err(e.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

fn parse_role(role: &str) -> PyResult<Role> {
    match role {
        "governor" => Ok(Role::Governor),
        "dependent" => Ok(Role::Dependent),
        _ => Err(PyValueError::new_err(format!(
            "role must be 'governor' or 'dependent', not {:?}",
            role
        ))),
    }
}

#[pyclass(name = "Vine")]
#[derive(Clone)]
pub struct PyVine {
    pub(crate) inner: Arc<RustVine>,
}

#[pymethods]
impl PyVine {
    /// Build a vine from one JSON document.
    ///
    /// Raises:
    ///     ValueError: If the JSON is malformed or a field is missing or undecodable
    #[new]
    fn new(json: &str) -> PyResult<Self> {
        let document: serde_json::Value =
            serde_json::from_str(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(RustVine::from_json(&document)?),
        })
    }

    #[getter]
    fn id(&self) -> String {
        self.inner.id().to_string()
    }

    #[getter]
    fn url(&self) -> String {
        self.inner.url().to_string()
    }

    #[getter]
    fn text(&self) -> String {
        self.inner.text().to_string()
    }

    #[getter]
    fn scrubbed_text(&self) -> String {
        self.inner.scrubbed_text().to_string()
    }

    /// (tag, token) pairs in sentence order
    #[getter]
    fn pos_tags(&self) -> Vec<(String, String)> {
        self.inner
            .tagged_tokens()
            .iter()
            .map(|t| (t.tag.clone(), t.token.clone()))
            .collect()
    }

    /// Dependency encodings, copy marks removed
    #[getter]
    fn dependencies(&self) -> Vec<String> {
        self.inner
            .dependencies()
            .iter()
            .map(|dep| dep.to_string())
            .collect()
    }

    fn contains_relation(&self, relation: &str) -> bool {
        self.inner.contains_relation(relation)
    }

    #[pyo3(signature = (word, scrubbed=false))]
    fn contains_exact_word(&self, word: &str, scrubbed: bool) -> bool {
        self.inner.contains_exact_word(word, scrubbed)
    }

    /// Does the phrase occur as a modifier star around its last word?
    ///
    /// Args:
    ///     phrase: e.g. "green bell pepper"
    ///     relations: relations that may anchor the root (empty: any)
    ///     role: "governor" or "dependent"
    #[pyo3(signature = (phrase, relations=Vec::new(), role="governor"))]
    fn matches_phrase(&self, phrase: &str, relations: Vec<String>, role: &str) -> PyResult<bool> {
        let role = parse_role(role)?;
        let relations: Vec<&str> = relations.iter().map(String::as_str).collect();
        Ok(self.inner.matches_phrase(phrase, &relations, role))
    }

    fn record_match(&self, name: &str) {
        self.inner.record_match(name);
    }

    #[getter]
    fn matched_filters(&self) -> Vec<String> {
        self.inner.matched_filters()
    }

    /// The source document plus matched filters, as a JSON string
    fn to_json(&self) -> String {
        self.inner.to_json().to_string()
    }

    fn __len__(&self) -> usize {
        self.inner.tagged_tokens().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "<Vine id={} len={} text={:?}>",
            self.inner.id(),
            self.inner.tagged_tokens().len(),
            self.inner.text()
        )
    }
}

/// Read every valid vine from JSON Lines files matching a glob pattern.
///
/// Invalid lines and unreadable files are skipped.
///
/// Raises:
///     ValueError: If glob pattern is invalid
#[pyfunction]
fn read_vines_glob(glob_pattern: &str) -> PyResult<Vec<PyVine>> {
    let dataset = Dataset::from_glob(glob_pattern)?;
    Ok(dataset
        .into_iter()
        .map(|vine| PyVine {
            inner: Arc::new(vine),
        })
        .collect())
}

/// Read every valid vine from one JSON Lines file (optionally gzipped).
#[pyfunction]
fn read_vines(path: PathBuf) -> Vec<PyVine> {
    Dataset::from_file(path)
        .into_iter()
        .map(|vine| PyVine {
            inner: Arc::new(vine),
        })
        .collect()
}

#[pyfunction]
fn __version__() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[pymodule]
fn vinefilter(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyVine>()?;

    m.add_function(wrap_pyfunction!(read_vines, m)?)?;
    m.add_function(wrap_pyfunction!(read_vines_glob, m)?)?;
    m.add_function(wrap_pyfunction!(__version__, m)?)?;

    Ok(())
}
