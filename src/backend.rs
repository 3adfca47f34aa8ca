//! Optional parser backend detection.
//!
//! TOML and YAML support rides on parser crates that a deployment may or
//! may not carry. Readers for those formats run a probe when they are
//! constructed and fail with [`Error::LibraryRequired`] when the backend is
//! absent, so the failure is a distinguished, catchable signal instead of a
//! crash at parse time. The probe is a trait so tests can stand in a double
//! that reports "unavailable" without touching any process-global state.

use crate::error::{Error, Result};

/// Identity of an optional parser backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// The TOML grammar parser.
    Toml,
    /// The YAML grammar parser.
    Yaml,
}

impl Backend {
    /// Name of the crate providing this backend.
    pub fn library(self) -> &'static str {
        match self {
            Backend::Toml => "toml",
            Backend::Yaml => "serde_yaml",
        }
    }

    /// Name of the format the backend parses.
    pub fn format(self) -> &'static str {
        match self {
            Backend::Toml => "toml",
            Backend::Yaml => "yaml",
        }
    }
}

/// Reports whether an optional backend is loaded in the current process.
///
/// Readers accept a probe at construction, so availability is re-evaluated
/// on every construction rather than cached at startup. Toggling a probe's
/// answer between two constructions is therefore observable, which is what
/// test doubles rely on.
pub trait BackendProbe: Send + Sync {
    /// Whether `backend` can be used right now.
    fn is_available(&self, backend: Backend) -> bool;
}

/// The default probe: every backend linked into this binary is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedBackends;

impl BackendProbe for LinkedBackends {
    fn is_available(&self, _backend: Backend) -> bool {
        true
    }
}

/// Construction-time guard shared by every optional-backend reader.
pub(crate) fn require(probe: &dyn BackendProbe, backend: Backend) -> Result<()> {
    if probe.is_available(backend) {
        Ok(())
    } else {
        Err(Error::LibraryRequired {
            library: backend.library(),
            format: backend.format(),
        })
    }
}
