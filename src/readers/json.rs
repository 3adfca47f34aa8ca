//! JSON reader backed by `serde_json`.

use std::io::Read;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use super::{slurp, FormatReader};
use crate::error::{Error, Result};
use crate::map::CaseInsensitiveMap;
use crate::registry::ReaderFactory;
use crate::value::Value;

/// Reads JSON documents.
///
/// The document's top level must be an object. Numbers keep their native
/// type: integral values become [`Value::Integer`], everything else
/// [`Value::Float`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReader;

impl JsonReader {
    /// Create a reader. The JSON backend is always linked, so construction
    /// never fails.
    pub fn new() -> Self {
        Self
    }

    /// A factory for registering this reader under a custom name.
    pub fn factory() -> ReaderFactory {
        Arc::new(|| -> Result<Box<dyn FormatReader>> { Ok(Box::new(JsonReader::new())) })
    }
}

impl FormatReader for JsonReader {
    fn format(&self) -> &'static str {
        "json"
    }

    fn read(&self, stream: &mut dyn Read) -> Result<CaseInsensitiveMap> {
        let text = slurp(stream)?;
        let document: JsonValue = serde_json::from_str(&text).map_err(|e| Error::Parse {
            format: self.format(),
            message: e.to_string(),
        })?;

        let root = match document {
            JsonValue::Object(object) => convert_object(object),
            other => {
                return Err(Error::Parse {
                    format: self.format(),
                    message: format!("top level must be an object, got {other}"),
                })
            }
        };

        tracing::debug!(format = self.format(), keys = root.len(), "parsed document");
        Ok(root)
    }
}

fn convert_object(object: serde_json::Map<String, JsonValue>) -> CaseInsensitiveMap {
    let mut map = CaseInsensitiveMap::with_capacity(object.len());
    for (key, value) in object {
        map.insert(key, convert(value));
    }
    map
}

/// Rebuild every object level as a case-insensitive map, leaving arrays
/// and scalars untouched.
fn convert(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => Value::String(s),
        JsonValue::Array(items) => Value::Array(items.into_iter().map(convert).collect()),
        JsonValue::Object(object) => Value::Map(convert_object(object)),
    }
}
