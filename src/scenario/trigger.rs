//! Scenario start protocol.
//!
//! A trigger is one `POST /api/scenarios/{name}/start`. The response body is
//! read as text first and only then parsed, so a non-JSON error page still
//! produces a useful failure detail. Every outcome maps to a fixed set of
//! log lines; nothing is retried.

use tracing::{debug, info, warn};

use crate::error::NetworkError;
use crate::log_panel::LogLine;
use crate::payload::{parse_lenient, truthy_field};
use crate::traits::{HttpClient, Response};

use super::run_id::extract_run_id;

/// Prefix for lines produced by dashboard actions.
pub const UI_PREFIX: &str = "UI";

/// Shown in place of a run identifier the backend did not return.
pub const MISSING_RUN_ID: &str = "n/a";

/// Failure detail used when the response carries nothing better.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// What a single start response tells us.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerResult {
    pub ok: bool,
    pub run_id: Option<String>,
    pub error_detail: Option<String>,
}

impl TriggerResult {
    /// Interpret a start response.
    ///
    /// On failure the detail prefers a truthy `detail` field, then the raw
    /// body, then [`UNKNOWN_ERROR`].
    pub fn from_response(response: &Response) -> Self {
        let raw = response.text();
        let data = parse_lenient(&raw);

        if !response.is_success() {
            let detail = data
                .as_ref()
                .and_then(|d| truthy_field(d, "detail"))
                .or_else(|| (!raw.is_empty()).then(|| raw.clone()))
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            return Self {
                ok: false,
                run_id: None,
                error_detail: Some(detail),
            };
        }

        Self {
            ok: true,
            run_id: extract_run_id(data.as_ref()),
            error_detail: None,
        }
    }

    pub fn into_outcome(self) -> TriggerOutcome {
        match (self.ok, self.run_id) {
            (true, Some(run_id)) => TriggerOutcome::Started { run_id },
            (true, None) => TriggerOutcome::StartedWithoutRunId,
            (false, _) => TriggerOutcome::Failed {
                detail: self
                    .error_detail
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            },
        }
    }
}

/// Terminal result of one trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerOutcome {
    /// Accepted with a run identifier.
    Started { run_id: String },
    /// Accepted, but no extraction rule found a run identifier.
    StartedWithoutRunId,
    /// The backend answered with a non-success status.
    Failed { detail: String },
    /// No response was obtained.
    Unreachable { error: NetworkError },
}

impl TriggerOutcome {
    /// Messages to append for this outcome, in order.
    pub fn messages(&self, scenario: &str) -> Vec<String> {
        match self {
            TriggerOutcome::Started { run_id } => {
                vec![format!("✅ Scenario started ({})", run_id)]
            }
            TriggerOutcome::StartedWithoutRunId => vec![
                "⚠️ Scenario accepted but no run_id returned. Check scenario-runner route/proxy."
                    .to_string(),
                format!("✅ Scenario started ({})", MISSING_RUN_ID),
            ],
            TriggerOutcome::Failed { detail } => {
                vec![format!("❌ Scenario failed: {} ({})", scenario, detail)]
            }
            TriggerOutcome::Unreachable { .. } => {
                vec![format!("❌ Failed to trigger scenario: {}", scenario)]
            }
        }
    }

    pub fn log_lines(&self, scenario: &str) -> Vec<LogLine> {
        self.messages(scenario)
            .into_iter()
            .map(|message| LogLine::new(UI_PREFIX, message))
            .collect()
    }
}

/// Message appended before the start request is sent.
pub fn announcement(scenario: &str) -> String {
    format!("▶ Triggering scenario: {}", scenario)
}

/// Send the start request for one scenario and classify the result.
pub async fn start_scenario<C>(client: &C, url: &str) -> TriggerOutcome
where
    C: HttpClient + ?Sized,
{
    info!("Starting scenario via {}", url);

    match client.post_empty(url).await {
        Ok(response) => {
            debug!(
                "Scenario start response: status={} type={:?} body={:?}",
                response.status,
                response.content_type,
                response.text()
            );
            TriggerResult::from_response(&response).into_outcome()
        }
        Err(error) => {
            warn!("Scenario start request failed [{}]: {}", error.error_code(), error);
            TriggerOutcome::Unreachable { error }
        }
    }
}
