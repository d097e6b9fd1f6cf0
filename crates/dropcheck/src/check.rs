use dropcheck_operations::operations::{CheckInput, CheckOperation, CheckReport};
use dropcheck_operations::providers::{FileSystemMigrationReader, Git2Provider, GitHubCommenter};
use tracing::info;

use crate::CheckArgs;
use crate::config::RunConfig;
use crate::error::Result;
use crate::output::WorkflowReporter;

pub(crate) fn run(args: CheckArgs) -> Result<CheckReport> {
    let config = RunConfig::from_env()?;
    let context = config
        .pull_request_context()?
        .with_base(args.base)
        .with_head(args.head);

    info!(
        repository = ?config.repository.as_ref().map(ToString::to_string),
        pull_request = ?context.number,
        "checking migrations under '{}'",
        args.path
    );

    let commenter = GitHubCommenter::new(&config.api_url, config.token.clone())?;
    let reporter = WorkflowReporter::new(std::io::stdout(), config.output_path.clone());

    let operation = CheckOperation::new(
        Git2Provider::new(),
        FileSystemMigrationReader::new(),
        commenter,
        reporter,
    );

    let input = CheckInput {
        project_root: args.repo_root,
        path: args.path,
        extension: args.extension,
        message: args.message,
        fail: args.fail,
        warning: args.warning,
        strict_diff: args.strict_diff,
    };

    Ok(operation.execute(&input, &context)?)
}
