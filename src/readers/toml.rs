//! TOML reader backed by the `toml` crate.

use std::io::Read;
use std::sync::Arc;

use toml::Value as TomlValue;

use super::{slurp, FormatReader};
use crate::backend::{self, Backend, BackendProbe, LinkedBackends};
use crate::error::{Error, Result};
use crate::map::CaseInsensitiveMap;
use crate::registry::ReaderFactory;
use crate::value::Value;

/// Reads TOML documents.
///
/// The TOML backend is optional in a deployment, so construction runs the
/// backend guard: it fails with [`Error::LibraryRequired`] when the backend
/// is unavailable, and the check is repeated on every construction.
/// Datetimes are carried as their string rendering; other scalars keep
/// their native type.
#[derive(Debug, Clone, Copy)]
pub struct TomlReader;

impl TomlReader {
    /// Create a reader, probing the linked-in backends.
    pub fn new() -> Result<Self> {
        Self::with_probe(&LinkedBackends)
    }

    /// Create a reader with an injected availability probe.
    ///
    /// Test suites pass a double reporting "unavailable" to exercise the
    /// [`Error::LibraryRequired`] path without altering the process.
    pub fn with_probe(probe: &dyn BackendProbe) -> Result<Self> {
        backend::require(probe, Backend::Toml)?;
        Ok(Self)
    }

    /// A factory for registering this reader under a custom name.
    ///
    /// The guard runs each time the factory is invoked, matching direct
    /// construction.
    pub fn factory() -> ReaderFactory {
        Arc::new(|| -> Result<Box<dyn FormatReader>> { Ok(Box::new(TomlReader::new()?)) })
    }
}

impl FormatReader for TomlReader {
    fn format(&self) -> &'static str {
        "toml"
    }

    fn read(&self, stream: &mut dyn Read) -> Result<CaseInsensitiveMap> {
        let text = slurp(stream)?;
        let document: TomlValue = toml::from_str(&text).map_err(|e| Error::Parse {
            format: self.format(),
            message: e.to_string(),
        })?;

        // `toml::from_str` only accepts a table at the top level, but the
        // match keeps the conversion total.
        let root = match document {
            TomlValue::Table(table) => convert_table(table),
            other => {
                return Err(Error::Parse {
                    format: self.format(),
                    message: format!("top level must be a table, got {other}"),
                })
            }
        };

        tracing::debug!(format = self.format(), keys = root.len(), "parsed document");
        Ok(root)
    }
}

fn convert_table(table: toml::map::Map<String, TomlValue>) -> CaseInsensitiveMap {
    let mut map = CaseInsensitiveMap::with_capacity(table.len());
    for (key, value) in table {
        map.insert(key, convert(value));
    }
    map
}

/// Rebuild every table level as a case-insensitive map, leaving arrays
/// and scalars untouched.
fn convert(value: TomlValue) -> Value {
    match value {
        TomlValue::String(s) => Value::String(s),
        TomlValue::Integer(i) => Value::Integer(i),
        TomlValue::Float(f) => Value::Float(f),
        TomlValue::Boolean(b) => Value::Bool(b),
        TomlValue::Datetime(dt) => Value::String(dt.to_string()),
        TomlValue::Array(items) => Value::Array(items.into_iter().map(convert).collect()),
        TomlValue::Table(table) => Value::Map(convert_table(table)),
    }
}
