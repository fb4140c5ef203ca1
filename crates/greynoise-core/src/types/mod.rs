mod context;
mod noise;
mod research;

pub use context::*;
pub use noise::*;
pub use research::*;

use serde_json::{Map, Value};

/// String value of `key`, if present and a string
fn str_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}
