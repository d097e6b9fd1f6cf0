pub mod detect;
pub mod error;
pub mod event;
pub mod filter;

pub use detect::{DropKind, DropStatement, contains_drop, find_drop};
pub use error::*;
pub use event::{GitRef, PullRequest, PullRequestContext, PullRequestEvent, RepositorySlug};
pub use filter::{DEFAULT_EXTENSION, filter_migrations, normalize_path};
