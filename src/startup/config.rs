//! Dashboard configuration.
//!
//! The target location is resolved once at startup. Every URL the dashboard
//! talks to is derived from it and stays fixed for the process lifetime.

use std::time::Duration;

use reqwest::Url;

use crate::error::ConfigError;
use crate::scenario::{default_catalog, parse_scenario_list, Scenario};
use crate::websocket::DEFAULT_RECONNECT_DELAY;

/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost";

/// Environment variable holding the base URL.
pub const ENV_URL: &str = "DEVSIM_URL";

/// Environment variable holding a comma-separated scenario list.
pub const ENV_SCENARIOS: &str = "DEVSIM_SCENARIOS";

const GRAFANA_PORT: u16 = 3000;
const PROMETHEUS_PORT: u16 = 9090;
const EVENTS_PATH: &str = "/ws/events";

/// Configuration for the dashboard.
///
/// Use the builder pattern to customize; [`DashboardConfig::resolve`]
/// validates the base URL and derives the endpoints.
///
/// # Example
///
/// ```ignore
/// use devsim::startup::DashboardConfig;
///
/// let config = DashboardConfig::from_env().with_base_url("http://demo.local:8080");
/// let endpoints = config.resolve()?;
/// assert_eq!(endpoints.grafana_url, "http://demo.local:3000");
/// ```
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Location of the simulator (scheme, host and optional port)
    pub base_url: String,
    /// Scenario controls offered, in display order
    pub scenarios: Vec<Scenario>,
    /// Wait between a stream closure and the next connection attempt
    pub reconnect_delay: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            scenarios: default_catalog(),
            reconnect_delay: DEFAULT_RECONNECT_DELAY,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Replace the scenario list.
    pub fn with_scenarios(mut self, scenarios: Vec<Scenario>) -> Self {
        self.scenarios = scenarios;
        self
    }

    /// Set the stream reconnect delay.
    pub fn with_reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }

    /// Create config from `DEVSIM_URL` and `DEVSIM_SCENARIOS`.
    ///
    /// Unset or blank variables leave the defaults in place.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();
        if let Some(url) = non_blank(ENV_URL) {
            config = config.with_base_url(url.trim());
        }
        if let Some(list) = non_blank(ENV_SCENARIOS) {
            config = config.with_scenarios(parse_scenario_list(&list));
        }
        config
    }

    /// Validate the configuration and derive the fixed endpoints.
    pub fn resolve(&self) -> Result<Endpoints, ConfigError> {
        if self.scenarios.is_empty() {
            return Err(ConfigError::EmptyScenarioList);
        }
        Endpoints::from_base_url(&self.base_url)
    }
}

/// URLs derived from the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// `scheme://host[:port]` of the simulator
    pub origin: String,
    /// Bare hostname, shown in the header
    pub host: String,
    pub grafana_url: String,
    pub prometheus_url: String,
    pub events_url: String,
}

impl Endpoints {
    /// Derive all endpoints from `base_url`.
    ///
    /// Dashboards always use plain http and the bare hostname. The API and
    /// the event socket keep the full authority, with `wss` under https.
    pub fn from_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        let ws_scheme = match url.scheme() {
            "http" => "ws",
            "https" => "wss",
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    scheme: other.to_string(),
                })
            }
        };

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ConfigError::MissingHost {
                url: base_url.to_string(),
            })?
            .to_string();

        let authority = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.clone(),
        };

        Ok(Self {
            origin: format!("{}://{}", url.scheme(), authority),
            grafana_url: format!("http://{}:{}", host, GRAFANA_PORT),
            prometheus_url: format!("http://{}:{}", host, PROMETHEUS_PORT),
            events_url: format!("{}://{}{}", ws_scheme, authority, EVENTS_PATH),
            host,
        })
    }

    /// `POST` target that starts `scenario`.
    pub fn scenario_start_url(&self, scenario: &str) -> String {
        format!("{}/api/scenarios/{}/start", self.origin, scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.base_url, "http://localhost");
        assert_eq!(config.scenarios.len(), 8);
        assert_eq!(config.reconnect_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_builder() {
        let config = DashboardConfig::new()
            .with_base_url("https://sim.example.com")
            .with_scenarios(vec![Scenario::new("cpu_spike")])
            .with_reconnect_delay(Duration::from_secs(3));

        assert_eq!(config.base_url, "https://sim.example.com");
        assert_eq!(config.scenarios, vec![Scenario::new("cpu_spike")]);
        assert_eq!(config.reconnect_delay, Duration::from_secs(3));
    }

    #[test]
    fn test_default_endpoints() {
        let endpoints = DashboardConfig::default().resolve().unwrap();
        assert_eq!(endpoints.origin, "http://localhost");
        assert_eq!(endpoints.host, "localhost");
        assert_eq!(endpoints.grafana_url, "http://localhost:3000");
        assert_eq!(endpoints.prometheus_url, "http://localhost:9090");
        assert_eq!(endpoints.events_url, "ws://localhost/ws/events");
        assert_eq!(
            endpoints.scenario_start_url("cpu_spike"),
            "http://localhost/api/scenarios/cpu_spike/start"
        );
    }

    #[test]
    fn test_port_kept_for_api_and_socket_only() {
        let endpoints = Endpoints::from_base_url("http://demo.local:8080/some/page").unwrap();
        assert_eq!(endpoints.origin, "http://demo.local:8080");
        assert_eq!(endpoints.grafana_url, "http://demo.local:3000");
        assert_eq!(endpoints.prometheus_url, "http://demo.local:9090");
        assert_eq!(endpoints.events_url, "ws://demo.local:8080/ws/events");
    }

    #[test]
    fn test_https_uses_wss() {
        let endpoints = Endpoints::from_base_url("https://sim.example.com").unwrap();
        assert_eq!(endpoints.events_url, "wss://sim.example.com/ws/events");
        // Dashboards stay on plain http
        assert_eq!(endpoints.grafana_url, "http://sim.example.com:3000");
        assert_eq!(
            endpoints.scenario_start_url("disk_full"),
            "https://sim.example.com/api/scenarios/disk_full/start"
        );
    }

    #[test]
    fn test_invalid_base_urls() {
        assert!(matches!(
            Endpoints::from_base_url("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert_eq!(
            Endpoints::from_base_url("ftp://files.local"),
            Err(ConfigError::UnsupportedScheme {
                scheme: "ftp".to_string()
            })
        );
    }

    #[test]
    fn test_empty_scenarios_rejected() {
        let config = DashboardConfig::default().with_scenarios(Vec::new());
        assert_eq!(config.resolve(), Err(ConfigError::EmptyScenarioList));
    }

    #[test]
    fn test_from_lookup() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            (ENV_URL, " http://10.0.0.5:8000 "),
            (ENV_SCENARIOS, "cpu_spike, net-partition"),
        ]));
        assert_eq!(config.base_url, "http://10.0.0.5:8000");
        let names: Vec<&str> = config.scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["cpu_spike", "net-partition"]);
    }

    #[test]
    fn test_from_lookup_blank_values_ignored() {
        let config =
            DashboardConfig::from_lookup(lookup_from(&[(ENV_URL, "  "), (ENV_SCENARIOS, "")]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.scenarios.len(), 8);
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var(ENV_URL, "http://env-host:9000");
        std::env::remove_var(ENV_SCENARIOS);

        let config = DashboardConfig::from_env();
        std::env::remove_var(ENV_URL);

        assert_eq!(config.base_url, "http://env-host:9000");
        assert_eq!(
            config.resolve().unwrap().events_url,
            "ws://env-host:9000/ws/events"
        );
    }
}
