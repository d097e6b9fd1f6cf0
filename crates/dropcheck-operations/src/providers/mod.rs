mod git;
mod github;
mod migration_reader;

pub use git::Git2Provider;
pub use github::{DEFAULT_API_URL, GitHubCommenter};
pub use migration_reader::FileSystemMigrationReader;
