//! MoonBit package descriptor (`moon.pkg.json`).

use serde_json::{Map, Value};

use crate::domain::AppError;

/// Key listing the C files compiled into the native stub.
pub const NATIVE_STUB_KEY: &str = "native-stub";

/// Stub sources that precede the vendored allowlist.
pub const NATIVE_STUB_PREFIX: [&str; 2] = ["pcre2.c", "pcre2_chartables.c"];

/// Key-value descriptor; unrelated keys and their order are preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageDescriptor {
    fields: Map<String, Value>,
}

impl PackageDescriptor {
    pub const FILE_NAME: &'static str = "moon.pkg.json";

    pub fn parse(content: &str, origin: &str) -> Result<Self, AppError> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(AppError::InvalidDescriptor {
                path: origin.to_string(),
                details: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Replace the native stub list with the fixed prefix followed by `sources`.
    pub fn set_native_stub<S: AsRef<str>>(&mut self, sources: &[S]) {
        let stub: Vec<Value> = NATIVE_STUB_PREFIX
            .iter()
            .map(|name| Value::String((*name).to_string()))
            .chain(sources.iter().map(|name| Value::String(name.as_ref().to_string())))
            .collect();
        self.fields.insert(NATIVE_STUB_KEY.to_string(), Value::Array(stub));
    }

    /// Pretty-printed with two-space indentation, no trailing newline. Output
    /// is ASCII only; other characters become lowercase `\uXXXX` escapes
    /// (surrogate pairs beyond the BMP).
    pub fn render(&self) -> Result<String, AppError> {
        let pretty = serde_json::to_string_pretty(&self.fields)?;
        Ok(escape_non_ascii(&pretty))
    }
}

// Non-ASCII can only occur inside string literals of serialized JSON, so
// escaping it in place keeps the document valid.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", *unit));
            }
        }
    }
    out
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
