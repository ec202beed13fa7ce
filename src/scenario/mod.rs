//! Scenario controls: the catalog, run identifier extraction, and the
//! start protocol.

pub mod catalog;
pub mod run_id;
pub mod trigger;

pub use catalog::{default_catalog, parse_scenario_list, Scenario, DEFAULT_SCENARIOS};
pub use run_id::{extract_run_id, RunIdRule, RUN_ID_RULES};
pub use trigger::{
    announcement, start_scenario, TriggerOutcome, TriggerResult, MISSING_RUN_ID, UI_PREFIX,
    UNKNOWN_ERROR,
};
