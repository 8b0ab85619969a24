//! Plain-text rendering of schemas, tokens and form states.

use std::fmt::Write as _;

use kms_args::{FieldDescriptor, FormState, Input, Schema};

/// One line per field: name, kind, widget and notes (`*` marks mandatory).
#[must_use]
pub fn schema_table(schema: &Schema) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", schema.title());
    if schema.is_empty() {
        out.push_str("(no fields)\n");
        return out;
    }
    let width = schema.iter().map(|field| field.name.len()).max().unwrap_or(0);
    for field in schema.iter() {
        let line = format!(
            "{:<width$}  {:<11}  {:<7}  {}",
            field.name,
            field.kind().as_str(),
            field.input.label(),
            notes(field),
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn notes(field: &FieldDescriptor) -> String {
    let mut notes = Vec::new();
    if field.mandatory {
        notes.push("*".to_string());
    }
    if let Input::Numeric { min, max, unit } = field.input {
        notes.push(match unit {
            Some(unit) => format!("{min}..{max} {unit}"),
            None => format!("{min}..{max}"),
        });
    }
    if let Some(message) = field.message {
        notes.push(message.to_string());
    }
    notes.join(" ")
}

/// One token per line.
#[must_use]
pub fn token_listing<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens.iter().fold(String::new(), |mut out, token| {
        out.push_str(token.as_ref());
        out.push('\n');
        out
    })
}

/// Fields holding a value, as a JSON object in schema order.
#[must_use]
pub fn present_fields(state: &FormState) -> serde_json::Value {
    let mut object = serde_json::Map::new();
    for (name, value) in state.iter().filter(|(_, value)| !value.is_unset()) {
        if let Ok(json) = serde_json::to_value(value) {
            object.insert(name.to_string(), json);
        }
    }
    serde_json::Value::Object(object)
}
