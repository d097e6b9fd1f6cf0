use std::path::Path;

use dropcheck_core::PullRequestContext;
use tracing::{error, info};

use crate::traits::GitProvider;
use crate::{ErrorChain, OperationError, Result};

/// Lists the paths changed between the context's base and head revisions.
///
/// A failed diff is logged and treated as an empty change set so that a
/// broken checkout does not block the pipeline. With `strict` set the
/// failure is returned instead.
///
/// # Errors
///
/// Only in strict mode: returns the diff failure, or
/// [`OperationError::MissingRevisions`] when the context has no revisions.
pub fn list_modified_files<G>(
    git: &G,
    project_root: &Path,
    context: &PullRequestContext,
    strict: bool,
) -> Result<Vec<String>>
where
    G: GitProvider + ?Sized,
{
    let result = context
        .revisions()
        .ok_or(OperationError::MissingRevisions)
        .and_then(|(base, head)| {
            info!(base, head, "listing modified files");
            git.changed_files(project_root, base, head)
        });

    match result {
        Ok(changes) => {
            let files: Vec<String> = changes.iter().map(|change| change.display_path()).collect();
            if files.is_empty() {
                info!("no modified files found");
            } else {
                info!(count = files.len(), files = ?files, "modified files");
            }
            Ok(files)
        }
        Err(e) if strict => Err(e),
        Err(e) => {
            error!(error = %ErrorChain(&e), "failed to list modified files; continuing with none");
            Ok(Vec::new())
        }
    }
}
