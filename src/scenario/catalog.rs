//! Scenario catalog.
//!
//! The default list mirrors the scenarios the simulator worker knows how to
//! run. Names are sent to the backend verbatim; an unknown name is reported
//! back by the worker over the incident stream, not rejected here.

/// Scenarios offered when no list is configured.
pub const DEFAULT_SCENARIOS: &[(&str, &str)] = &[
    ("db_latency", "DB Latency"),
    ("crash_loop", "Crash Loop"),
    ("memory_leak", "Memory Leak"),
    ("cpu_spike", "CPU Spike"),
    ("disk_full", "Disk Full"),
    ("network_loss", "Network Loss"),
    ("bad_deploy", "Bad Deploy"),
    ("secrets_expired", "Secrets Expired"),
];

/// A backend-triggerable scenario shown as one dashboard control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Identifier sent in the start request path.
    pub name: String,
    /// Human-readable label for the control.
    pub label: String,
}

impl Scenario {
    /// Create a scenario, taking the label from the default catalog when the
    /// name is known and deriving one otherwise.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let label = DEFAULT_SCENARIOS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| humanize(&name));
        Self { name, label }
    }

    pub fn with_label(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

/// The built-in scenario list.
pub fn default_catalog() -> Vec<Scenario> {
    DEFAULT_SCENARIOS
        .iter()
        .map(|(name, label)| Scenario::with_label(*name, *label))
        .collect()
}

/// Parse a comma-separated scenario list, skipping blank entries.
pub fn parse_scenario_list(list: &str) -> Vec<Scenario> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Scenario::new)
        .collect()
}

/// `net-partition` -> `Net Partition`
fn humanize(name: &str) -> String {
    name.split(|c| c == '_' || c == '-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog[0].name, "db_latency");
        assert_eq!(catalog[0].label, "DB Latency");
        assert_eq!(catalog[7].name, "secrets_expired");
    }

    #[test]
    fn test_known_name_uses_catalog_label() {
        assert_eq!(Scenario::new("cpu_spike").label, "CPU Spike");
    }

    #[test]
    fn test_unknown_name_is_humanized() {
        assert_eq!(Scenario::new("net-partition").label, "Net Partition");
        assert_eq!(Scenario::new("cache__stampede").label, "Cache Stampede");
    }

    #[test]
    fn test_parse_scenario_list() {
        let list = parse_scenario_list(" cpu_spike, ,net-partition,,");
        let names: Vec<&str> = list.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["cpu_spike", "net-partition"]);
        assert!(parse_scenario_list(" , ").is_empty());
    }
}
