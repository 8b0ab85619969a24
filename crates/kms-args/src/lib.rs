//! `kms-args` - field model and argument codec for KMS-Tools launch forms.
//!
//! A page's Form State is encoded into a flat token sequence
//! (`NAME`, `NAME=VALUE`, `NAME+=VALUE`) and recovered from one when a saved
//! configuration seeds the form.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Non-blocking form checks.
pub mod advisory;
/// Built-in page schemas.
pub mod catalog;
/// Form State to tokens and back.
pub mod codec;
/// Schema and form errors.
pub mod error;
/// Field descriptors and widget hints.
pub mod field;
/// Typed Form State.
pub mod form;
/// Per-page form groups.
pub mod page;
/// Launch request payload.
pub mod request;
/// Ordered field tables.
pub mod schema;

pub use advisory::Advisory;
pub use catalog::Page;
pub use codec::{encode, extract_field, extract_state};
pub use error::{FormError, SchemaError};
pub use field::{FieldDescriptor, FieldKind, Input};
pub use form::{FieldValue, FormState};
pub use page::{Group, PageForm};
pub use request::{LaunchParameters, LaunchRequest};
pub use schema::Schema;
