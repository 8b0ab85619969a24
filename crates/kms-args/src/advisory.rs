//! Non-blocking checks shown next to the form.
//!
//! Nothing here is consulted by the encoder or the request builder: an empty
//! mandatory field still produces a request.

#![allow(missing_docs)]

use std::fmt;

use serde::Serialize;

use crate::field::Input;
use crate::form::{FieldValue, FormState};
use crate::schema::Schema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Advisory {
    /// Mandatory field left empty.
    MissingMandatory { field: &'static str },
    /// Enum value outside the option list.
    UnlistedOption { field: &'static str, value: String },
    /// Numeric value that does not parse.
    NotNumeric { field: &'static str, value: String },
    /// Numeric value outside `[min, max]`.
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl Advisory {
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingMandatory { field }
            | Self::UnlistedOption { field, .. }
            | Self::NotNumeric { field, .. }
            | Self::OutOfRange { field, .. } => *field,
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMandatory { field } => write!(f, "{field} is mandatory"),
            Self::UnlistedOption { field, value } => {
                write!(f, "{field}: '{value}' is not one of the listed options")
            }
            Self::NotNumeric { field, value } => write!(f, "{field}: '{value}' is not a number"),
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field}: {value} is outside [{min}, {max}]"),
        }
    }
}

#[must_use]
pub fn check(schema: &Schema, state: &FormState) -> Vec<Advisory> {
    let mut advisories = Vec::new();
    for field in schema.iter() {
        let value = state.get(field.name);
        if field.mandatory && value.is_none_or(FieldValue::is_unset) {
            advisories.push(Advisory::MissingMandatory { field: field.name });
            continue;
        }
        let Some(FieldValue::Scalar(text)) = value else {
            continue;
        };
        if text.is_empty() {
            continue;
        }
        match field.input {
            Input::Enum { options } if !options.iter().any(|option| *option == text.as_str()) => {
                advisories.push(Advisory::UnlistedOption {
                    field: field.name,
                    value: text.clone(),
                });
            }
            Input::Numeric { min, max, .. } => match text.trim().parse::<i64>() {
                Ok(number) if number < min || number > max => {
                    advisories.push(Advisory::OutOfRange {
                        field: field.name,
                        value: number,
                        min,
                        max,
                    });
                }
                Ok(_) => {}
                Err(_) => advisories.push(Advisory::NotNumeric {
                    field: field.name,
                    value: text.clone(),
                }),
            },
            _ => {}
        }
    }
    advisories
}
