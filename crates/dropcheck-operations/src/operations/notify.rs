use dropcheck_core::PullRequestContext;
use tracing::{debug, info, warn};

use super::ScanOutcome;
use crate::traits::{IssueCommenter, RunReporter};
use crate::{OperationError, Result};

pub const DROP_DETECTED_WARNING: &str =
    "A table or column drop has been detected in the migration.";
pub const NO_DROP_INFO: &str = "No table or column drop detected in the migration.";
pub const UNSAFE_MIGRATION_FAILURE: &str = "Potentially unsafe migration detected";

pub struct NotifySettings<'a> {
    /// Comment body posted on the pull request.
    pub message: &'a str,
    /// Post a comment when a drop is detected.
    pub warning: bool,
    /// Mark the run failed when a drop is detected.
    pub fail: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Notification {
    pub comment_posted: bool,
    pub failed: bool,
}

/// Reports a scan outcome to the CI host and, when configured, to the
/// pull request.
///
/// Outside a pull request context the comment is skipped. The failure
/// signal is sent through the reporter rather than returned, so the caller
/// can still publish outputs.
///
/// # Errors
///
/// Returns an error if a comment is due but no repository is configured, or
/// if posting the comment fails.
pub fn notify<C, R>(
    commenter: &C,
    reporter: &R,
    outcome: &ScanOutcome,
    context: &PullRequestContext,
    settings: &NotifySettings<'_>,
) -> Result<Notification>
where
    C: IssueCommenter + ?Sized,
    R: RunReporter + ?Sized,
{
    let Some(detection) = outcome.detection() else {
        info!("{NO_DROP_INFO}");
        reporter.info(NO_DROP_INFO);
        return Ok(Notification::default());
    };

    warn!(file = %detection.file, "{DROP_DETECTED_WARNING}");
    reporter.warning(DROP_DETECTED_WARNING, Some(&detection.file));

    let mut notification = Notification::default();

    if settings.warning {
        match context.number {
            Some(number) => {
                let repository = context
                    .repository
                    .as_ref()
                    .ok_or(OperationError::MissingRepository { number })?;
                commenter.create_comment(repository, number, settings.message)?;
                notification.comment_posted = true;
            }
            None => debug!("not a pull request event; skipping comment"),
        }
    }

    if settings.fail {
        reporter.set_failed(UNSAFE_MIGRATION_FAILURE);
        notification.failed = true;
    }

    Ok(notification)
}
