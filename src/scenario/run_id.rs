//! Run identifier extraction.
//!
//! Scenario-runner deployments have returned the run identifier under
//! several shapes. The rules below are evaluated in order and the first
//! truthy value wins.

use serde_json::Value;

use crate::payload::truthy_text;

/// One place a run identifier may live in a start response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunIdRule {
    /// A top-level field.
    Field(&'static str),
    /// A field reached through nested objects.
    Path(&'static [&'static str]),
}

/// Extraction rules in priority order.
pub const RUN_ID_RULES: &[RunIdRule] = &[
    RunIdRule::Field("run_id"),
    RunIdRule::Field("runId"),
    RunIdRule::Field("id"),
    RunIdRule::Path(&["data", "run_id"]),
];

impl RunIdRule {
    /// The raw value this rule points at, if present.
    pub fn lookup<'a>(&self, data: &'a Value) -> Option<&'a Value> {
        match self {
            RunIdRule::Field(key) => data.get(key),
            RunIdRule::Path(keys) => keys.iter().try_fold(data, |value, key| value.get(key)),
        }
    }

    /// Display text for the value this rule points at, if truthy.
    pub fn extract(&self, data: &Value) -> Option<String> {
        self.lookup(data).and_then(truthy_text)
    }
}

/// Apply [`RUN_ID_RULES`] to parsed response data.
pub fn extract_run_id(data: Option<&Value>) -> Option<String> {
    let data = data?;
    RUN_ID_RULES.iter().find_map(|rule| rule.extract(data))
}
