use showcase_core::error::workflow::{Severity, WorkflowLoadError};
use showcase_core::report::Reporter;
use slog::Logger;

/// Sends loader conditions to the log: missing files as warnings, anything
/// unusable as errors.
pub struct LogReporter<'a> {
    logger: &'a Logger,
}

impl<'a> LogReporter<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self { logger }
    }
}

impl Reporter for LogReporter<'_> {
    fn report(&self, condition: &WorkflowLoadError) {
        match condition.severity() {
            Severity::Warning => slog::warn!(self.logger, "{}", condition),
            Severity::Error => slog::error!(self.logger, "{}", condition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::workflow::load_workflow;
    use slog::{Drain, Level};
    use std::sync::{Arc, Mutex};

    struct Capture(Arc<Mutex<Vec<(Level, String)>>>);

    impl Drain for Capture {
        type Ok = ();
        type Err = slog::Never;

        fn log(
            &self,
            record: &slog::Record<'_>,
            _values: &slog::OwnedKVList,
        ) -> Result<Self::Ok, Self::Err> {
            self.0
                .lock()
                .unwrap()
                .push((record.level(), record.msg().to_string()));
            Ok(())
        }
    }

    fn capturing_logger() -> (Logger, Arc<Mutex<Vec<(Level, String)>>>) {
        let records = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::root(Capture(records.clone()).fuse(), slog::o!());
        (logger, records)
    }

    #[test]
    fn missing_file_is_logged_as_warning() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, records) = capturing_logger();

        load_workflow(
            &dir.path().join("workflow.json"),
            "Untitled Workflow",
            &LogReporter::new(&logger),
        );

        let records = records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, Level::Warning);
        assert!(records[0].1.contains("workflow.json not found"));
    }

    #[test]
    fn malformed_file_is_logged_as_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workflow.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let (logger, records) = capturing_logger();

        load_workflow(&path, "Untitled Workflow", &LogReporter::new(&logger));

        let records = records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, Level::Error);
        assert!(records[0].1.starts_with("Error parsing"));
    }
}
