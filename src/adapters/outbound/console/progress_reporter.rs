use crate::ports::outbound::ProgressReporter;

/// TracingProgressReporter adapter: forwards progress to `tracing` events
///
/// Output format and level filtering belong to whatever subscriber the
/// binary installs; this type only picks the level per message kind.
#[derive(Debug, Clone)]
pub struct TracingProgressReporter;

/// Value of the `component` field on every event
const COMPONENT: &str = "brewlock_sbom";

impl TracingProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for TracingProgressReporter {
    fn report(&self, message: &str) {
        tracing::info!(component = COMPONENT, "{}", message);
    }

    fn report_detail(&self, message: &str) {
        tracing::debug!(component = COMPONENT, "{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        match message {
            Some(msg) => tracing::info!(component = COMPONENT, current, total, "{}", msg),
            None => tracing::info!(component = COMPONENT, current, total, "progress"),
        }
    }

    fn report_error(&self, message: &str) {
        tracing::warn!(component = COMPONENT, "{}", message);
    }

    fn report_completion(&self, message: &str) {
        tracing::info!(component = COMPONENT, "{}", message);
    }
}
