//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic::{self, PanicHookInfo};

/// Install a panic hook that records the panic in the log file, restores the
/// terminal, and then hands over to the previous hook so the message lands
/// on a usable screen.
///
/// Call before creating the `TerminalManager`.
pub fn setup_panic_hook() {
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!("devsim panicked: {}", describe(info));
        emergency_restore();
        previous(info);
    }));
}

/// `message at file:line`
fn describe(info: &PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string payload>");
    match info.location() {
        Some(location) => format!("{} at {}:{}", message, location.file(), location.line()),
        None => message.to_string(),
    }
}
