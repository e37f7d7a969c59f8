//! Error taxonomy for the resolution and download pipeline.
//!
//! Every fatal condition maps to exactly one variant so the CLI can print a
//! single-line diagnostic and exit non-zero. Checksum mismatches are not an
//! `Error`: they are the `Mismatch` arm of [`crate::checksum::VerifyResult`]
//! and get their own exit path at the CLI boundary.

use thiserror::Error;

/// Pipeline errors. All variants are fatal; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure or non-2xx status from a metadata or artifact endpoint.
    #[error("network error: {0}")]
    Network(String),

    /// Response body was not valid JSON, or a field held an unexpected shape.
    #[error("malformed metadata: {0}")]
    Parse(String),

    /// A required field was absent from a metadata document.
    ///
    /// Callers treat this as "absent" rather than fatal for optional fields
    /// and for the ordered promotion-lookup tiers.
    #[error("field not found in metadata: {0}")]
    FieldNotFound(String),

    /// The requested version identifier is not present in the manifest.
    #[error("unknown version '{0}': not present in the version manifest")]
    UnknownVersion(String),

    /// Local filesystem failure while writing or reading the artifact.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
