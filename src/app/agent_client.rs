//! HTTP client for the carousel generation agent service.
//!
//! The agent service is an opaque collaborator: postdeck sends one prompt
//! plus a fixed agent identifier and receives one structured response. The
//! response envelope is validated here, at the network boundary, before any
//! of it reaches application state — the opaque `result` payload only becomes
//! a [`CarouselResult`] if it decodes into the expected shape.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::app::carousel::{build_prompt, CarouselInput, CarouselResult};

/// Fixed identifier of the carousel generation agent configuration.
pub const CAROUSEL_AGENT_ID: &str = "6986f22ce31e7bbb7ef45a62";

/// Base URL of the agent service deployment.
const AGENT_SERVICE_BASE_URL: &str = "https://agents.postdeck.app";

/// Request body for one agent invocation.
#[derive(Debug, Serialize)]
struct InvokeRequest<'a> {
    message: &'a str,
    agent_id: &'a str,
}

/// Outer response envelope returned by the agent service.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentEnvelope {
    pub success: bool,
    pub response: AgentResponseBody,
}

/// Inner response body carrying the agent's own status and opaque payload.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentResponseBody {
    pub status: String,
    #[serde(default)]
    pub result: serde_json::Value,
}

/// Client for invoking the carousel generation agent.
#[derive(Debug, Clone)]
pub struct AgentClient {
    /// HTTP client used for agent invocations
    client: reqwest::blocking::Client,
    /// Base URL of the agent service
    base_url: String,
}

impl AgentClient {
    /// Create a client against the default agent service deployment.
    pub fn new() -> Result<Self> {
        Self::with_base_url(AGENT_SERVICE_BASE_URL)
    }

    /// Create a client against a specific agent service deployment.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(AgentClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Generate a carousel for the given input.
    ///
    /// Exactly one request/response pair per call: no retries, no streaming,
    /// no partial results. Any transport failure, non-success envelope, or
    /// payload that fails schema validation comes back as an error.
    pub fn generate_carousel(&self, input: &CarouselInput) -> Result<CarouselResult> {
        let prompt = build_prompt(input);
        self.invoke(&prompt)
    }

    fn invoke(&self, prompt: &str) -> Result<CarouselResult> {
        let url = format!("{}/api/v1/agents/invoke", self.base_url);
        let request = InvokeRequest {
            message: prompt,
            agent_id: CAROUSEL_AGENT_ID,
        };

        log::debug!("Invoking carousel agent at {}", url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .context("failed to reach the agent service")?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Agent service returned HTTP {}", status);
            return Err(anyhow!("agent service returned HTTP {}", status));
        }

        let envelope: AgentEnvelope = response
            .json()
            .context("agent service returned a malformed envelope")?;

        decode_result(envelope)
    }
}

/// Validate an agent envelope and decode its payload into [`CarouselResult`].
///
/// Success requires both the outer `success` flag and an inner status of
/// `"success"`; the opaque payload must then match the carousel schema.
pub fn decode_result(envelope: AgentEnvelope) -> Result<CarouselResult> {
    if !envelope.success {
        return Err(anyhow!("agent service reported failure"));
    }

    if envelope.response.status != "success" {
        return Err(anyhow!(
            "agent returned status \"{}\"",
            envelope.response.status
        ));
    }

    serde_json::from_value(envelope.response.result)
        .context("agent result did not match the carousel schema")
}
