use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under a single target so they can
/// be filtered with `RUST_LOG=plant_identifier=debug`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "plant_identifier", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "plant_identifier", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "plant_identifier", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "plant_identifier", "{}", message);
    }
}
