//! Schema and form errors.

#![allow(missing_docs)]

use smol_str::SmolStr;
use thiserror::Error;

use crate::field::FieldKind;

/// Errors raised while assembling a schema table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two descriptors share the same name.
    #[error("duplicate field '{0}' in schema '{1}'")]
    DuplicateField(SmolStr, SmolStr),

    /// A descriptor has an empty name.
    #[error("empty field name in schema '{0}'")]
    EmptyName(SmolStr),

    /// No page of the catalog has this name.
    #[error("unknown page '{0}'")]
    UnknownPage(SmolStr),
}

/// Errors raised by Form State updates.
///
/// Encoding and extraction never fail; only edits addressed to a field can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The field name is not part of the schema the state was built for.
    #[error("unknown field '{0}'")]
    UnknownField(SmolStr),

    /// The update does not fit the field kind.
    #[error("field '{name}' is a {expected} field, not {got}")]
    KindMismatch {
        name: SmolStr,
        expected: FieldKind,
        got: FieldKind,
    },

    /// A textual edit could not be split into name and value.
    #[error("invalid assignment '{0}' (expected NAME, NAME=VALUE or NAME+=VALUE)")]
    InvalidAssignment(SmolStr),
}
