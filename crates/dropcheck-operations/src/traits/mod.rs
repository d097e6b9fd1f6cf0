mod git_provider;
mod issue_commenter;
mod migration_reader;
mod run_reporter;

pub use git_provider::GitProvider;
pub use issue_commenter::IssueCommenter;
pub use migration_reader::MigrationReader;
pub use run_reporter::RunReporter;
