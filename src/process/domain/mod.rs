//! Domain model for process identification and allow entries.

mod entry;
mod error;
mod uri;
mod version;

pub use entry::{AllowedRequester, ProcessAllowEntry, ProcessKey, ProcessStatus};
pub use error::{ParseProcessVersionError, ProcessUriError};
pub use uri::{PROCESS_PATH_SEGMENT, ProcessUri};
pub use version::ProcessVersion;
