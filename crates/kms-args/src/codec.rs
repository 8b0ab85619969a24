//! Argument codec: Form State to token sequence and back.
//!
//! Token grammar:
//!
//! ```text
//! token        := flag-token | scalar-token | multi-token
//! flag-token   := NAME
//! scalar-token := NAME "=" VALUE
//! multi-token  := NAME "+=" VALUE
//! ```
//!
//! `VALUE` may be empty and is never escaped. Both directions are total.

use tracing::{debug, warn};

use crate::field::{FieldDescriptor, FieldKind};
use crate::form::{FieldValue, FormState};
use crate::schema::Schema;

/// Encodes `state` in the declaration order of `schema`.
///
/// Missing entries, unset values and values of the wrong kind emit nothing.
/// Mandatory fields are not enforced.
#[must_use]
pub fn encode(schema: &Schema, state: &FormState) -> Vec<String> {
    let mut tokens = Vec::new();
    for field in schema.iter() {
        encode_field(field, state.get(field.name), &mut tokens);
    }
    tokens
}

/// Appends the tokens for one field.
pub fn encode_field(field: &FieldDescriptor, value: Option<&FieldValue>, out: &mut Vec<String>) {
    match (field.kind(), value) {
        (FieldKind::Flag, Some(FieldValue::Flag(true))) => out.push(field.name.to_string()),
        (FieldKind::Scalar, Some(FieldValue::Scalar(value))) if !value.is_empty() => {
            out.push(format!("{}={value}", field.name));
        }
        (FieldKind::MultiValue, Some(FieldValue::Multi(values))) => {
            out.extend(values.iter().map(|value| format!("{}+={value}", field.name)));
        }
        _ => {}
    }
}

/// `true` when a token equal to `name` is present.
pub fn extract_flag<S: AsRef<str>>(tokens: &[S], name: &str) -> bool {
    tokens.iter().any(|token| token.as_ref() == name)
}

/// Value of the first `NAME=` token, or `""` when there is none.
pub fn extract_scalar<S: AsRef<str>>(tokens: &[S], name: &str) -> String {
    tokens
        .iter()
        .find_map(|token| strip_scalar(token.as_ref(), name))
        .unwrap_or_default()
        .to_string()
}

/// Values of every `NAME+=` token, in encounter order.
pub fn extract_multi<S: AsRef<str>>(tokens: &[S], name: &str) -> Vec<String> {
    tokens
        .iter()
        .filter_map(|token| strip_multi(token.as_ref(), name))
        .map(str::to_string)
        .collect()
}

/// Recovers one field in the shape of its kind.
pub fn extract_field<S: AsRef<str>>(tokens: &[S], field: &FieldDescriptor) -> FieldValue {
    match field.kind() {
        FieldKind::Flag => FieldValue::Flag(extract_flag(tokens, field.name)),
        FieldKind::Scalar => FieldValue::Scalar(extract_scalar(tokens, field.name)),
        FieldKind::MultiValue => FieldValue::Multi(extract_multi(tokens, field.name)),
    }
}

/// Seeds a Form State for `schema` from a token sequence.
///
/// Tokens that belong to no field are ignored.
pub fn extract_state<S: AsRef<str>>(tokens: &[S], schema: &Schema) -> FormState {
    let mut state = FormState::new(schema);
    for field in schema.iter() {
        if let Err(err) = state.set(field.name, extract_field(tokens, field)) {
            warn!(schema = schema.title(), %err, "extracted value rejected");
        }
    }
    let foreign = unrecognized(tokens, schema).len();
    if foreign > 0 {
        debug!(schema = schema.title(), foreign, "ignored tokens outside the schema");
    }
    state
}

/// Tokens that match no field of `schema` in the shape of its kind.
pub fn unrecognized<'t, S: AsRef<str>>(tokens: &'t [S], schema: &Schema) -> Vec<&'t str> {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|token| !schema.iter().any(|field| matches_field(field, token)))
        .collect()
}

/// Whether `token` is an encoding of `field`.
#[must_use]
pub fn matches_field(field: &FieldDescriptor, token: &str) -> bool {
    match field.kind() {
        FieldKind::Flag => token == field.name,
        FieldKind::Scalar => strip_scalar(token, field.name).is_some(),
        FieldKind::MultiValue => strip_multi(token, field.name).is_some(),
    }
}

fn strip_scalar<'t>(token: &'t str, name: &str) -> Option<&'t str> {
    token.strip_prefix(name)?.strip_prefix('=')
}

fn strip_multi<'t>(token: &'t str, name: &str) -> Option<&'t str> {
    token.strip_prefix(name)?.strip_prefix("+=")
}
