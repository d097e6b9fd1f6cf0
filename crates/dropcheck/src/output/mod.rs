mod workflow;

pub(crate) use workflow::{WorkflowReporter, escape_data};

use crate::error::CliError;

/// Reports a tool failure, as opposed to a detected drop: an `::error::`
/// command on stdout and the full cause chain on stderr.
pub(crate) fn print_error(error: &CliError) {
    println!("::error::{}", escape_data(&format!("dropcheck failed: {error}")));

    eprintln!("error: {error}");
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
