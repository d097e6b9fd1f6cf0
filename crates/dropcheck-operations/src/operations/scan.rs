use std::path::Path;

use dropcheck_core::{DropStatement, find_drop};
use tracing::{debug, info, warn};

use crate::ErrorChain;
use crate::traits::MigrationReader;

/// The first offending migration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub file: String,
    pub statement: DropStatement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Clean,
    Flagged(Detection),
}

impl ScanOutcome {
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        matches!(self, Self::Flagged(_))
    }

    #[must_use]
    pub fn detection(&self) -> Option<&Detection> {
        match self {
            Self::Clean => None,
            Self::Flagged(detection) => Some(detection),
        }
    }
}

/// Reads migrations in order and stops at the first destructive one.
///
/// Unreadable files are logged and skipped; they never count as a match.
pub fn scan_migrations<R>(reader: &R, repository_root: &Path, files: &[String]) -> ScanOutcome
where
    R: MigrationReader + ?Sized,
{
    let detection = files.iter().find_map(|file| {
        debug!(file = %file, "reading migration");
        match reader.read_migration(repository_root, file) {
            Ok(content) => find_drop(&content).map(|statement| Detection {
                file: file.clone(),
                statement,
            }),
            Err(e) => {
                warn!(file = %file, error = %ErrorChain(&e), "skipping unreadable migration");
                None
            }
        }
    });

    match detection {
        Some(detection) => {
            info!(
                file = %detection.file,
                line = detection.statement.line,
                statement = %detection.statement.text,
                "drop {} detected",
                detection.statement.kind
            );
            ScanOutcome::Flagged(detection)
        }
        None => ScanOutcome::Clean,
    }
}
