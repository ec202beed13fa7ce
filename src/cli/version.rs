//! Version and usage output for devsim.

/// The current version of devsim, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Terminal dashboard for the DevOps simulator

Usage: devsim [OPTIONS]

Options:
  -u, --url <URL>          Simulator base URL [env: DEVSIM_URL] [default: http://localhost]
  -s, --scenario <NAME>    Scenario to offer; repeatable [env: DEVSIM_SCENARIOS]
  -h, --help               Print help
  -V, --version            Print version

Keys:
  up/down, k/j   select scenario      enter, 1-9   trigger scenario
  g              open Grafana         p            open Prometheus
  pgup/pgdn      scroll event log     end          follow newest events
  q, esc         quit

Diagnostics are written to <cache dir>/devsim/devsim.log (filter: DEVSIM_LOG).";

pub fn version_line() -> String {
    format!("devsim {}", VERSION)
}

/// Handle the --version command.
///
/// Prints the version string and exits successfully.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    println!("{}\n\n{}", version_line(), USAGE);
    std::process::exit(0)
}
