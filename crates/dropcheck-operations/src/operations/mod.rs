mod check;
mod modified_files;
mod notify;
mod scan;

pub use check::{CheckInput, CheckOperation, CheckReport, MIGRATION_FILES_OUTPUT, MODIFIED_FILES_OUTPUT};
pub use modified_files::list_modified_files;
pub use notify::{
    DROP_DETECTED_WARNING, NO_DROP_INFO, Notification, NotifySettings, UNSAFE_MIGRATION_FAILURE,
    notify,
};
pub use scan::{Detection, ScanOutcome, scan_migrations};
