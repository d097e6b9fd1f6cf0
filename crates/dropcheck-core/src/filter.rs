pub const DEFAULT_EXTENSION: &str = ".sql";

/// Strips a single leading `./` from a repository-relative path.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

/// Keeps the paths under `prefix` that end with `extension`.
///
/// Comparison is plain, case-sensitive string matching on the normalized
/// path, so `migrations` also matches `migrations_v2/001.sql`. Input order
/// is preserved.
#[must_use]
pub fn filter_migrations<S: AsRef<str>>(files: &[S], prefix: &str, extension: &str) -> Vec<String> {
    let prefix = normalize_path(prefix);

    files
        .iter()
        .map(AsRef::as_ref)
        .filter(|file| {
            let file = normalize_path(file);
            file.starts_with(prefix) && file.ends_with(extension)
        })
        .map(ToString::to_string)
        .collect()
}
