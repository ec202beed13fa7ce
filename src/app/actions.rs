//! User-triggered actions: opening dashboards and starting scenarios.

use tracing::{info, warn};

use crate::scenario::{announcement, start_scenario, UI_PREFIX};

use super::{App, AppMessage};

/// External observability dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashboard {
    Grafana,
    Prometheus,
}

impl Dashboard {
    pub fn name(&self) -> &'static str {
        match self {
            Dashboard::Grafana => "Grafana",
            Dashboard::Prometheus => "Prometheus",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Dashboard::Grafana => "📊",
            Dashboard::Prometheus => "📈",
        }
    }

    /// Key that opens this dashboard.
    pub fn key(&self) -> char {
        match self {
            Dashboard::Grafana => 'g',
            Dashboard::Prometheus => 'p',
        }
    }
}

impl App {
    /// URL of `dashboard` for the configured host.
    pub fn dashboard_url(&self, dashboard: Dashboard) -> &str {
        match dashboard {
            Dashboard::Grafana => &self.endpoints.grafana_url,
            Dashboard::Prometheus => &self.endpoints.prometheus_url,
        }
    }

    /// Open `dashboard` in the system browser.
    ///
    /// A launch failure only reaches the tracing log; the confirmation line
    /// is appended either way.
    pub fn open_dashboard(&mut self, dashboard: Dashboard) {
        let url = self.dashboard_url(dashboard).to_string();
        if let Err(e) = self.browser.open(&url) {
            warn!("Failed to open {} at {}: {}", dashboard.name(), url, e);
        }
        self.log.append_line(
            UI_PREFIX,
            format!("{} Opened {} → {}", dashboard.icon(), dashboard.name(), url),
        );
        self.mark_dirty();
    }

    pub fn open_grafana(&mut self) {
        self.open_dashboard(Dashboard::Grafana);
    }

    pub fn open_prometheus(&mut self) {
        self.open_dashboard(Dashboard::Prometheus);
    }

    /// Trigger the scenario at `index`.
    ///
    /// The announcement is appended immediately; the start request runs on
    /// its own task and reports back with [`AppMessage::ScenarioFinished`].
    /// Triggers are independent: nothing is queued, merged, or throttled.
    pub fn trigger_scenario(&mut self, index: usize) {
        let Some(scenario) = self.scenarios.get(index) else {
            return;
        };
        let name = scenario.name.clone();
        let url = self.endpoints.scenario_start_url(&name);

        info!("Triggering scenario {}", name);
        self.log.append_line(UI_PREFIX, announcement(&name));
        self.in_flight += 1;
        self.mark_dirty();

        let http = self.http.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = start_scenario(http.as_ref(), &url).await;
            let _ = message_tx.send(AppMessage::ScenarioFinished {
                scenario: name,
                outcome,
            });
        });
    }

    /// Trigger the highlighted scenario.
    pub fn trigger_selected(&mut self) {
        self.trigger_scenario(self.selected);
    }
}
