//! Field descriptors: static metadata for one configurable setting.

#![allow(missing_docs)]

use std::fmt;

use serde::Serialize;

/// Encoding shape of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    /// Bare `NAME` token when set.
    Flag,
    /// One `NAME=VALUE` token when non-empty.
    Scalar,
    /// One `NAME+=VALUE` token per element.
    MultiValue,
}

impl FieldKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Scalar => "scalar",
            Self::MultiValue => "multi-value",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Widget hint for the form. Never affects encoding beyond selecting the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Input {
    Flag,
    Enum {
        options: &'static [&'static str],
    },
    File,
    Folder,
    Text,
    Numeric {
        min: i64,
        max: i64,
        unit: Option<&'static str>,
    },
    TextList,
}

impl Input {
    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Flag => FieldKind::Flag,
            Self::TextList => FieldKind::MultiValue,
            Self::Enum { .. } | Self::File | Self::Folder | Self::Text | Self::Numeric { .. } => {
                FieldKind::Scalar
            }
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Enum { .. } => "enum",
            Self::File => "file",
            Self::Folder => "folder",
            Self::Text => "text",
            Self::Numeric { .. } => "numeric",
            Self::TextList => "list",
        }
    }
}

/// Static metadata for one field of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub input: Input,
    /// Shown as `*` next to the widget. Not enforced by the encoder.
    pub mandatory: bool,
    pub message: Option<&'static str>,
}

impl FieldDescriptor {
    #[must_use]
    pub const fn new(name: &'static str, input: Input) -> Self {
        Self {
            name,
            input,
            mandatory: false,
            message: None,
        }
    }

    #[must_use]
    pub const fn flag(name: &'static str) -> Self {
        Self::new(name, Input::Flag)
    }

    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self::new(name, Input::Text)
    }

    #[must_use]
    pub const fn file(name: &'static str) -> Self {
        Self::new(name, Input::File)
    }

    #[must_use]
    pub const fn folder(name: &'static str) -> Self {
        Self::new(name, Input::Folder)
    }

    #[must_use]
    pub const fn list(name: &'static str) -> Self {
        Self::new(name, Input::TextList)
    }

    #[must_use]
    pub const fn choice(name: &'static str, options: &'static [&'static str]) -> Self {
        Self::new(name, Input::Enum { options })
    }

    #[must_use]
    pub const fn numeric(
        name: &'static str,
        min: i64,
        max: i64,
        unit: Option<&'static str>,
    ) -> Self {
        Self::new(name, Input::Numeric { min, max, unit })
    }

    #[must_use]
    pub const fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.input.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_selects_kind() {
        assert_eq!(FieldDescriptor::flag("Help").kind(), FieldKind::Flag);
        assert_eq!(FieldDescriptor::list("Routes").kind(), FieldKind::MultiValue);
        assert_eq!(FieldDescriptor::folder("Log_Folder").kind(), FieldKind::Scalar);
        assert_eq!(
            FieldDescriptor::choice("Browser.Prefered", &["EDGE"]).kind(),
            FieldKind::Scalar
        );
        assert_eq!(
            FieldDescriptor::numeric("Socket.SendTimeout", 0, 10, Some("ms")).kind(),
            FieldKind::Scalar
        );
    }

    #[test]
    fn builders_keep_metadata() {
        let exec = FieldDescriptor::file("Exec")
            .mandatory()
            .with_message("Executable to launch");
        assert!(exec.mandatory);
        assert_eq!(exec.message, Some("Executable to launch"));
        assert_eq!(exec.input, Input::File);
    }
}
