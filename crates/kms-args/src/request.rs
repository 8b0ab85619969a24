//! Launch request payload.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::codec::encode;
use crate::form::FormState;
use crate::schema::Schema;

/// Auxiliary launch parameters edited next to the page form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchParameters {
    pub detach: bool,
    pub exit: bool,
    pub working_directory: String,
}

impl LaunchParameters {
    /// Reads the parameters from a state built for [`catalog::LAUNCHER_PARAMETERS`].
    #[must_use]
    pub fn from_state(state: &FormState) -> Self {
        Self {
            detach: state.flag("Detach"),
            exit: state.flag("Exit"),
            working_directory: state.scalar("WorkingDirectory").to_string(),
        }
    }
}

/// Body of `POST /back-end/Launch`.
///
/// Optional keys are written only when truthy; the back-end tells "not
/// specified" apart from "explicitly empty" by key absence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchRequest {
    #[serde(default)]
    pub arguments: Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub detach: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub exit: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl LaunchRequest {
    /// Page tokens first, then the shared KMS Arguments group.
    #[must_use]
    pub fn build(
        page: &Schema,
        page_state: &FormState,
        kms_state: &FormState,
        parameters: &LaunchParameters,
    ) -> Self {
        let mut arguments = encode(page, page_state);
        arguments.extend(encode(&catalog::KMS_ARGUMENTS, kms_state));
        Self {
            arguments,
            detach: parameters.detach,
            exit: parameters.exit,
            working_directory: Some(parameters.working_directory.clone())
                .filter(|dir| !dir.is_empty()),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }

    /// Reads a payload saved from an earlier submission. Missing keys are
    /// falsy, as when it was sent.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
