//! Ordered field tables.

#![allow(missing_docs)]

use std::collections::HashSet;

use smol_str::SmolStr;

use crate::error::SchemaError;
use crate::field::FieldDescriptor;

/// Ordered list of field descriptors for one configuration group.
///
/// Declaration order is the order the encoder emits tokens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    title: &'static str,
    fields: &'static [FieldDescriptor],
}

impl Schema {
    /// Builds a schema, rejecting duplicate or empty names.
    pub fn new(
        title: &'static str,
        fields: &'static [FieldDescriptor],
    ) -> Result<Self, SchemaError> {
        let schema = Self::from_table(title, fields);
        schema.validate()?;
        Ok(schema)
    }

    /// Builds a schema from a table whose names are already known to be unique.
    ///
    /// Used for the built-in catalog; `validate` is exercised by its tests.
    #[must_use]
    pub const fn from_table(title: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self { title, fields }
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in self.fields {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyName(SmolStr::new(self.title)));
            }
            if !seen.insert(field.name) {
                return Err(SchemaError::DuplicateField(
                    SmolStr::new(field.name),
                    SmolStr::new(self.title),
                ));
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub const fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUPLICATED: &[FieldDescriptor] = &[
        FieldDescriptor::text("Title"),
        FieldDescriptor::flag("Help"),
        FieldDescriptor::text("Title"),
    ];

    const UNNAMED: &[FieldDescriptor] = &[FieldDescriptor::flag("")];

    const ORDERED: &[FieldDescriptor] = &[
        FieldDescriptor::text("Zeta"),
        FieldDescriptor::text("Alpha"),
    ];

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Schema::new("Broken", DUPLICATED).unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateField(SmolStr::new("Title"), SmolStr::new("Broken"))
        );
    }

    #[test]
    fn empty_names_are_rejected() {
        assert_eq!(
            Schema::new("Unnamed", UNNAMED).unwrap_err(),
            SchemaError::EmptyName(SmolStr::new("Unnamed"))
        );
    }

    #[test]
    fn lookup_keeps_declaration_order() {
        let schema = Schema::new("Ordered", ORDERED).unwrap();
        let names: Vec<_> = schema.iter().map(|field| field.name).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
        assert!(schema.field("Alpha").is_some());
        assert!(schema.field("alpha").is_none());
    }
}
