//! Submission and configuration errors.

#![allow(missing_docs)]

use smol_str::SmolStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    #[error("transport error '{0}'")]
    Transport(SmolStr),

    /// The back-end answered with a non-empty `Error` field.
    #[error("{0}")]
    Backend(SmolStr),

    /// The back-end answered with an error status and no `Error` field.
    #[error("back-end returned HTTP {0}")]
    Status(u16),

    /// The response body is not the expected JSON object.
    #[error("invalid response '{0}'")]
    InvalidResponse(SmolStr),

    /// Configuration error.
    #[error("invalid config '{0}'")]
    InvalidConfig(SmolStr),
}
