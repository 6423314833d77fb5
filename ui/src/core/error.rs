//! Error types for the shared crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("launch timestamp `{raw}` is not valid RFC 3339")]
    InvalidLaunchTimestamp {
        raw: String,
        #[source]
        source: time::error::Parse,
    },
}
