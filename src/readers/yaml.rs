//! YAML reader backed by `serde_yaml`.

use std::io::Read;
use std::sync::Arc;

use serde_yaml::Value as YamlValue;

use super::{slurp, FormatReader};
use crate::backend::{self, Backend, BackendProbe, LinkedBackends};
use crate::error::{Error, Result};
use crate::map::CaseInsensitiveMap;
use crate::registry::ReaderFactory;
use crate::value::Value;

/// Reads YAML documents.
///
/// The YAML backend is optional in a deployment, so construction runs the
/// backend guard: it fails with [`Error::LibraryRequired`] when the backend
/// is unavailable, and the check is repeated on every construction.
/// Scalars keep their native type; tagged values unwrap to their inner
/// value. Mapping keys must be scalars.
#[derive(Debug, Clone, Copy)]
pub struct YamlReader;

impl YamlReader {
    /// Create a reader, probing the linked-in backends.
    pub fn new() -> Result<Self> {
        Self::with_probe(&LinkedBackends)
    }

    /// Create a reader with an injected availability probe.
    ///
    /// Test suites pass a double reporting "unavailable" to exercise the
    /// [`Error::LibraryRequired`] path without altering the process.
    pub fn with_probe(probe: &dyn BackendProbe) -> Result<Self> {
        backend::require(probe, Backend::Yaml)?;
        Ok(Self)
    }

    /// A factory for registering this reader under a custom name.
    ///
    /// The guard runs each time the factory is invoked, matching direct
    /// construction.
    pub fn factory() -> ReaderFactory {
        Arc::new(|| -> Result<Box<dyn FormatReader>> { Ok(Box::new(YamlReader::new()?)) })
    }
}

impl FormatReader for YamlReader {
    fn format(&self) -> &'static str {
        "yaml"
    }

    fn read(&self, stream: &mut dyn Read) -> Result<CaseInsensitiveMap> {
        let text = slurp(stream)?;
        let document: YamlValue = serde_yaml::from_str(&text).map_err(|e| Error::Parse {
            format: self.format(),
            message: e.to_string(),
        })?;

        let root = match document {
            YamlValue::Mapping(mapping) => convert_mapping(mapping)?,
            other => {
                return Err(Error::Parse {
                    format: self.format(),
                    message: format!("top level must be a mapping, got {other:?}"),
                })
            }
        };

        tracing::debug!(format = self.format(), keys = root.len(), "parsed document");
        Ok(root)
    }
}

fn convert_mapping(mapping: serde_yaml::Mapping) -> Result<CaseInsensitiveMap> {
    let mut map = CaseInsensitiveMap::with_capacity(mapping.len());
    for (key, value) in mapping {
        map.insert(key_string(key)?, convert(value)?);
    }
    Ok(map)
}

/// YAML allows arbitrarily-typed mapping keys; only scalar keys have a
/// place in a string-keyed map.
fn key_string(key: YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        other => Err(Error::Parse {
            format: "yaml",
            message: format!("unsupported mapping key: {other:?}"),
        }),
    }
}

/// Rebuild every mapping level as a case-insensitive map, leaving
/// sequences and scalars untouched.
fn convert(value: YamlValue) -> Result<Value> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => {
            Value::Array(items.into_iter().map(convert).collect::<Result<_>>()?)
        }
        YamlValue::Mapping(mapping) => Value::Map(convert_mapping(mapping)?),
        YamlValue::Tagged(tagged) => convert(tagged.value)?,
    })
}
