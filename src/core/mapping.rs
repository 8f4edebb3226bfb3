//! Inbound body translation
//!
//! Bodies are opaque JSON objects. The only change made on the way in is a
//! per-operation field rename; every other field is passed through untouched.
//! List operations that Retell serves through a POST get their query string
//! converted into the JSON body instead.

use serde_json::{Map, Value};
use url::form_urlencoded;

use super::upstream::Operation;
use crate::errors::app_error::{AppError, AppResult};

/// Phone calls accept the short `from`/`to` names as well as Retell's own.
const PHONE_CALL_RENAMES: &[(&str, &str)] = &[("from", "from_number"), ("to", "to_number")];

/// Field renames (`inbound` → `upstream`) applied for an operation.
pub fn renames_for(operation: Operation) -> &'static [(&'static str, &'static str)] {
    match operation {
        Operation::CreatePhoneCall => PHONE_CALL_RENAMES,
        _ => &[],
    }
}

/// Rename fields in place. When both names are present the upstream name
/// wins and the short alias is dropped.
pub fn rename_fields(body: &mut Map<String, Value>, renames: &[(&str, &str)]) {
    for (from, to) in renames {
        if let Some(value) = body.remove(*from) {
            if body.contains_key(*to) {
                tracing::debug!(
                    alias = %from,
                    field = %to,
                    "Both alias and upstream field present, keeping upstream field"
                );
                continue;
            }
            body.insert((*to).to_string(), value);
        }
    }
}

/// Parse an inbound body and apply the operation's renames.
///
/// An empty body is treated as `{}`. Anything other than a JSON object is
/// rejected before it reaches Retell.
pub fn prepare_body(operation: Operation, raw: &[u8]) -> AppResult<Value> {
    let mut body = parse_object(raw)?;
    rename_fields(&mut body, renames_for(operation));
    Ok(Value::Object(body))
}

/// Turn a raw query string into the JSON body of a POST-based list operation.
///
/// `a[b]=1` nests into objects, `a[]=x` or a repeated key builds an array.
/// Values that are valid JSON numbers, booleans, objects or arrays keep that
/// type (`limit=5` becomes `5`); anything else stays a string.
pub fn query_to_body(query: Option<&str>) -> Value {
    let mut body = Map::new();
    for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
        insert_at(&mut body, &key_path(&key), query_value(&value));
    }
    Value::Object(body)
}

/// `a[b][]` → `["a", "b", ""]`
fn key_path(key: &str) -> Vec<&str> {
    match key.find('[') {
        Some(start) if start > 0 && key.ends_with(']') => {
            let mut path = vec![&key[..start]];
            path.extend(key[start + 1..key.len() - 1].split("]["));
            path
        }
        _ => vec![key],
    }
}

fn query_value(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Number(_) | Value::Bool(_) | Value::Object(_) | Value::Array(_))) => {
            value
        }
        _ => Value::String(raw.to_string()),
    }
}

fn insert_at(map: &mut Map<String, Value>, path: &[&str], value: Value) {
    let Some((&key, rest)) = path.split_first() else {
        return;
    };

    match rest.first() {
        None => append(map, key, value),
        Some(&"") => match map
            .entry(key.to_string())
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            Value::Array(items) => items.push(value),
            other => {
                let previous = other.take();
                *other = Value::Array(vec![previous, value]);
            }
        },
        Some(_) => {
            let entry = map
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(child) = entry {
                insert_at(child, rest, value);
            }
        }
    }
}

/// Repeated keys collect into an array.
fn append(map: &mut Map<String, Value>, key: &str, value: Value) {
    match map.get_mut(key) {
        None => {
            map.insert(key.to_string(), value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let previous = existing.take();
            *existing = Value::Array(vec![previous, value]);
        }
    }
}

fn parse_object(raw: &[u8]) -> AppResult<Map<String, Value>> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(AppError::InvalidBody(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
        Err(e) => Err(AppError::InvalidBody(format!("malformed JSON: {e}"))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
