mod check;
mod config;
mod error;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser};
use dropcheck_core::DEFAULT_EXTENSION;

const DEFAULT_MESSAGE: &str = "This pull request contains a migration that drops a table or a column. \
Dropping is irreversible and loses data: make sure no running code still reads it before merging.";

#[derive(Parser)]
#[command(name = "dropcheck")]
#[command(version = env!("DROPCHECK_VERSION"))]
#[command(about = "Detect migrations that drop tables or columns in a pull request", long_about = None)]
struct Cli {
    /// Log at debug level (overridden by DROPCHECK_LOG)
    #[arg(long, short = 'v')]
    verbose: bool,

    #[command(flatten)]
    check: CheckArgs,
}

/// Inputs mirror the GitHub Action's, so each flag falls back to its
/// `INPUT_*` variable.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Directory prefix of the migration files, e.g. `prisma/migrations`
    #[arg(long, env = "INPUT_PATH", value_parser = NonEmptyStringValueParser::new())]
    path: String,

    /// Extension of migration files
    #[arg(
        long,
        env = "INPUT_EXTENSION",
        default_value = DEFAULT_EXTENSION,
        value_parser = NonEmptyStringValueParser::new()
    )]
    extension: String,

    /// Comment posted on the pull request when a drop is detected
    #[arg(long, env = "INPUT_MESSAGE", default_value = DEFAULT_MESSAGE, hide_default_value = true)]
    message: String,

    /// Mark the run failed when a drop is detected
    #[arg(
        long,
        env = "INPUT_FAIL",
        value_parser = parse_action_bool,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true"
    )]
    fail: bool,

    /// Comment on the pull request when a drop is detected
    #[arg(
        long,
        env = "INPUT_WARNING",
        value_parser = parse_action_bool,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true"
    )]
    warning: bool,

    /// Fail the run when the modified files cannot be listed
    #[arg(
        long,
        env = "INPUT_STRICT-DIFF",
        value_parser = parse_action_bool,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true"
    )]
    strict_diff: bool,

    /// Base revision, overriding the pull request event
    #[arg(long)]
    base: Option<String>,

    /// Head revision, overriding the pull request event
    #[arg(long)]
    head: Option<String>,

    /// Directory inside the repository to check
    #[arg(long = "repo-root", short = 'C', default_value = ".")]
    repo_root: PathBuf,
}

/// Accepts the YAML 1.2 core schema booleans, like the Actions toolkit.
fn parse_action_bool(value: &str) -> Result<bool, String> {
    match value.trim() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        other => Err(format!(
            "'{other}' is not a boolean; use one of true, True, TRUE, false, False, FALSE"
        )),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match check::run(cli.check) {
        Ok(report) if report.failed() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
