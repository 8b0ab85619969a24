//! Form State: one typed record per schema.

#![allow(missing_docs)]

use indexmap::IndexMap;
use serde::Serialize;
use smol_str::SmolStr;

use crate::error::FormError;
use crate::field::FieldKind;
use crate::schema::Schema;

/// Current value of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Scalar(String),
    Multi(Vec<String>),
}

impl FieldValue {
    /// The "not present" value for a kind.
    #[must_use]
    pub fn unset(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Flag => Self::Flag(false),
            FieldKind::Scalar => Self::Scalar(String::new()),
            FieldKind::MultiValue => Self::Multi(Vec::new()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Flag(_) => FieldKind::Flag,
            Self::Scalar(_) => FieldKind::Scalar,
            Self::Multi(_) => FieldKind::MultiValue,
        }
    }

    #[must_use]
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Flag(value) => !value,
            Self::Scalar(value) => value.is_empty(),
            Self::Multi(values) => values.is_empty(),
        }
    }
}

/// Field name to current value, in schema order.
///
/// Built from a schema so every update can be checked against the field kind.
/// A missing entry behaves like an unset value when encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormState {
    values: IndexMap<SmolStr, FieldValue>,
}

impl FormState {
    #[must_use]
    pub fn new(schema: &Schema) -> Self {
        let values = schema
            .iter()
            .map(|field| (SmolStr::new(field.name), FieldValue::unset(field.kind())))
            .collect();
        Self { values }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(FieldValue::Flag(true)))
    }

    #[must_use]
    pub fn scalar(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Scalar(value)) => value,
            _ => "",
        }
    }

    #[must_use]
    pub fn multi(&self, name: &str) -> &[String] {
        match self.values.get(name) {
            Some(FieldValue::Multi(values)) => values,
            _ => &[],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Names of fields currently holding a set value.
    pub fn present(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, value)| !value.is_unset())
            .map(|(name, _)| name)
    }

    /// Replaces a field value. The value kind must match the field kind.
    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<(), FormError> {
        let slot = self.slot(name, value.kind())?;
        *slot = value;
        Ok(())
    }

    pub fn set_flag(&mut self, name: &str, value: bool) -> Result<(), FormError> {
        self.set(name, FieldValue::Flag(value))
    }

    pub fn set_scalar(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.set(name, FieldValue::Scalar(value.into()))
    }

    pub fn set_multi(&mut self, name: &str, values: Vec<String>) -> Result<(), FormError> {
        self.set(name, FieldValue::Multi(values))
    }

    /// Appends one element to a multi-value field. Empty strings and repeats are kept.
    pub fn push(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        if let FieldValue::Multi(values) = self.slot(name, FieldKind::MultiValue)? {
            values.push(value.into());
        }
        Ok(())
    }

    /// Resets a field to its unset value.
    pub fn clear(&mut self, name: &str) -> Result<(), FormError> {
        let slot = self
            .values
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(SmolStr::new(name)))?;
        *slot = FieldValue::unset(slot.kind());
        Ok(())
    }

    /// Applies a textual edit in token syntax.
    ///
    /// `NAME` sets a flag, `NAME=VALUE` sets a scalar (or a flag from
    /// `true`/`false`), `NAME+=VALUE` appends to a multi-value field.
    pub fn apply(&mut self, edit: &str) -> Result<(), FormError> {
        let Some(split) = edit.find('=') else {
            return self.set_flag(edit, true);
        };
        let (head, value) = (&edit[..split], &edit[split + 1..]);
        if head.is_empty() {
            return Err(FormError::InvalidAssignment(SmolStr::new(edit)));
        }
        if let Some(name) = head.strip_suffix('+') {
            if !name.is_empty() && !self.values.contains_key(head) {
                return self.push(name, value);
            }
        }
        match self.values.get(head).map(FieldValue::kind) {
            Some(FieldKind::Flag) => match value {
                "true" => self.set_flag(head, true),
                "false" => self.set_flag(head, false),
                _ => Err(FormError::KindMismatch {
                    name: SmolStr::new(head),
                    expected: FieldKind::Flag,
                    got: FieldKind::Scalar,
                }),
            },
            _ => self.set_scalar(head, value),
        }
    }

    fn slot(&mut self, name: &str, kind: FieldKind) -> Result<&mut FieldValue, FormError> {
        let slot = self
            .values
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(SmolStr::new(name)))?;
        if slot.kind() != kind {
            return Err(FormError::KindMismatch {
                name: SmolStr::new(name),
                expected: slot.kind(),
                got: kind,
            });
        }
        Ok(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldDescriptor;

    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::file("Exec").mandatory(),
        FieldDescriptor::flag("Help"),
        FieldDescriptor::list("ConfigFiles"),
    ];

    fn state() -> FormState {
        FormState::new(&Schema::from_table("Test", FIELDS))
    }

    #[test]
    fn new_state_is_unset_in_schema_order() {
        let state = state();
        let names: Vec<_> = state.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Exec", "Help", "ConfigFiles"]);
        assert!(state.iter().all(|(_, value)| value.is_unset()));
        assert_eq!(state.present().count(), 0);
    }

    #[test]
    fn updates_are_checked_against_the_field_kind() {
        let mut state = state();
        state.set_scalar("Exec", "tool.exe").unwrap();
        state.set_flag("Help", true).unwrap();
        state.push("ConfigFiles", "a.cfg").unwrap();
        state.push("ConfigFiles", "a.cfg").unwrap();

        assert_eq!(state.scalar("Exec"), "tool.exe");
        assert!(state.flag("Help"));
        assert_eq!(state.multi("ConfigFiles"), ["a.cfg", "a.cfg"]);

        assert_eq!(
            state.set_flag("Exec", true),
            Err(FormError::KindMismatch {
                name: SmolStr::new("Exec"),
                expected: FieldKind::Scalar,
                got: FieldKind::Flag,
            })
        );
        assert_eq!(
            state.push("Nope", "x"),
            Err(FormError::UnknownField(SmolStr::new("Nope")))
        );
    }

    #[test]
    fn clear_resets_to_unset() {
        let mut state = state();
        state.push("ConfigFiles", "a.cfg").unwrap();
        state.clear("ConfigFiles").unwrap();
        assert_eq!(state.get("ConfigFiles"), Some(&FieldValue::Multi(Vec::new())));
    }

    #[test]
    fn apply_parses_token_syntax() {
        let mut state = state();
        state.apply("Help").unwrap();
        state.apply("Exec=C:\\bin\\a=b.exe").unwrap();
        state.apply("ConfigFiles+=").unwrap();
        state.apply("ConfigFiles+=b.cfg").unwrap();

        assert!(state.flag("Help"));
        assert_eq!(state.scalar("Exec"), "C:\\bin\\a=b.exe");
        assert_eq!(state.multi("ConfigFiles"), ["", "b.cfg"]);

        state.apply("Help=false").unwrap();
        assert!(!state.flag("Help"));

        assert!(matches!(
            state.apply("=x"),
            Err(FormError::InvalidAssignment(_))
        ));
        assert!(matches!(
            state.apply("Help=maybe"),
            Err(FormError::KindMismatch { .. })
        ));
    }

    #[test]
    fn serializes_as_a_plain_object() {
        let mut state = state();
        state.set_scalar("Exec", "tool.exe").unwrap();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "Exec": "tool.exe", "Help": false, "ConfigFiles": [] })
        );
    }
}
