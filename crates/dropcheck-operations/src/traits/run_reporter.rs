use crate::Result;

/// Channel back to the CI host: log lines, annotations, run status and
/// step outputs.
pub trait RunReporter: Send + Sync {
    fn info(&self, message: &str);

    /// Emits a warning annotation, optionally attached to a file.
    fn warning(&self, message: &str, file: Option<&str>);

    /// Marks the run as failed. Does not stop the run.
    fn set_failed(&self, message: &str);

    /// # Errors
    ///
    /// Returns an error if the output cannot be recorded.
    fn set_output(&self, name: &str, value: &str) -> Result<()>;
}
