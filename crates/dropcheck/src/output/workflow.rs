use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use dropcheck_operations::traits::RunReporter;
use dropcheck_operations::{OperationError, Result};
use tracing::{info, warn};

const OUTPUT_DELIMITER: &str = "DROPCHECK_OUTPUT_EOF";

/// Escapes a workflow command message.
pub(crate) fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escapes a workflow command property value such as `file=`.
pub(crate) fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// [`RunReporter`] speaking the GitHub Actions workflow command protocol.
///
/// Commands go to `out` (stdout in production); outputs are appended to the
/// `$GITHUB_OUTPUT` file when one is configured.
pub(crate) struct WorkflowReporter<W: Write> {
    out: Mutex<W>,
    output_path: Option<PathBuf>,
}

impl<W: Write> WorkflowReporter<W> {
    pub fn new(out: W, output_path: Option<PathBuf>) -> Self {
        Self {
            out: Mutex::new(out),
            output_path,
        }
    }

    fn emit(&self, line: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            warn!(error = %e, "failed to write workflow command");
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> RunReporter for WorkflowReporter<W> {
    fn info(&self, message: &str) {
        self.emit(message);
    }

    fn warning(&self, message: &str, file: Option<&str>) {
        let line = match file {
            Some(file) => format!(
                "::warning file={}::{}",
                escape_property(file),
                escape_data(message)
            ),
            None => format!("::warning::{}", escape_data(message)),
        };
        self.emit(&line);
    }

    fn set_failed(&self, message: &str) {
        self.emit(&format!("::error::{}", escape_data(message)));
    }

    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        let Some(path) = &self.output_path else {
            info!(name, value, "GITHUB_OUTPUT is not set; output not recorded");
            return Ok(());
        };

        let entry = if value.contains('\n') {
            format!("{name}<<{OUTPUT_DELIMITER}\n{value}\n{OUTPUT_DELIMITER}\n")
        } else {
            format!("{name}={value}\n")
        };

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(entry.as_bytes()))
            .map_err(|source| OperationError::OutputWrite {
                name: name.to_string(),
                path: path.clone(),
                source,
            })
    }
}
