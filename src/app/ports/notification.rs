use color_eyre::eyre::Report;

/// Fire-and-forget sink for user-visible failure reports.
pub trait NotificationSink: Send + Sync {
    fn log_exception(&self, error: &Report, label: &str);
}
