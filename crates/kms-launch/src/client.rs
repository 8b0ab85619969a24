//! Blocking client for the back-end launch endpoints.
//!
//! The client keeps no state about requests in flight; calling `launch` twice
//! sends two requests.

#![allow(missing_docs)]

use serde::Deserialize;
use serde_json::{json, Value};
use smol_str::SmolStr;
use tracing::{debug, info};

use kms_args::LaunchRequest;

use crate::config::AppConfig;
use crate::error::ClientError;

pub const LAUNCH_PATH: &str = "/back-end/Launch";
pub const EXIT_PATH: &str = "/back-end/Exit";

/// Back-end reply. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchResponse {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl LaunchResponse {
    fn into_result(self) -> Result<Self, ClientError> {
        match self.error.as_deref() {
            Some(message) if !message.is_empty() => Err(ClientError::Backend(message.into())),
            _ => Ok(self),
        }
    }
}

#[derive(Clone)]
pub struct LaunchClient {
    agent: ureq::Agent,
    base: SmolStr,
}

impl LaunchClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.timeout)
            .timeout_read(config.timeout)
            .build();
        Self {
            agent,
            base: config.endpoint.clone(),
        }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Sends the payload as built; nothing is validated or added.
    pub fn launch(&self, request: &LaunchRequest) -> Result<LaunchResponse, ClientError> {
        info!(
            arguments = request.arguments.len(),
            detach = request.detach,
            exit = request.exit,
            "launch"
        );
        self.post(LAUNCH_PATH, &request.to_json())
    }

    /// Asks the back-end to shut down.
    pub fn exit(&self) -> Result<LaunchResponse, ClientError> {
        info!("exit");
        self.post(EXIT_PATH, &json!({}))
    }

    fn post(&self, path: &str, body: &Value) -> Result<LaunchResponse, ClientError> {
        let url = format!("{}{path}", self.base);
        debug!(%url, %body, "POST");
        let response = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_string(&body.to_string());
        match response {
            Ok(response) => {
                let text = response
                    .into_string()
                    .map_err(|err| ClientError::Transport(err.to_string().into()))?;
                parse_response(&text)?.into_result()
            }
            Err(ureq::Error::Status(status, response)) => {
                let text = response.into_string().unwrap_or_default();
                match parse_response(&text) {
                    Ok(parsed) => {
                        parsed.into_result()?;
                        Err(ClientError::Status(status))
                    }
                    Err(_) => Err(ClientError::Status(status)),
                }
            }
            Err(ureq::Error::Transport(err)) => {
                Err(ClientError::Transport(err.to_string().into()))
            }
        }
    }
}

/// Parses a response body; an object without `Error` is a success.
pub fn parse_response(text: &str) -> Result<LaunchResponse, ClientError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|err| ClientError::InvalidResponse(format!("{err}").into()))?;
    if !value.is_object() {
        return Err(ClientError::InvalidResponse(
            format!("expected a JSON object, got {value}").into(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|err| ClientError::InvalidResponse(format!("{err}").into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_becomes_backend_error() {
        let parsed = parse_response(r#"{"Result":"Error","Error":"Bad request"}"#).unwrap();
        assert_eq!(
            parsed.into_result(),
            Err(ClientError::Backend(SmolStr::new("Bad request")))
        );
    }

    #[test]
    fn empty_error_is_success() {
        let parsed = parse_response(r#"{"Result":"OK","Error":""}"#).unwrap();
        assert_eq!(parsed.result.as_deref(), Some("OK"));
        assert!(parsed.into_result().is_ok());
        assert!(parse_response("{}").unwrap().into_result().is_ok());
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert!(matches!(
            parse_response("[]"),
            Err(ClientError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_response("OK"),
            Err(ClientError::InvalidResponse(_))
        ));
    }
}
