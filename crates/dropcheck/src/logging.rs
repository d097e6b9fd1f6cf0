use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DROPCHECK_LOG";

/// Installs the stderr log subscriber. Stdout is reserved for workflow
/// commands.
///
/// `DROPCHECK_LOG` takes precedence; otherwise the level is `debug` when
/// `verbose` is set or the runner has step debugging enabled.
pub(crate) fn init(verbose: bool) {
    let runner_debug = std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1");
    let default_level = if verbose || runner_debug { "debug" } else { "info" };

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}
