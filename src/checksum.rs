//! Artifact checksum verification
//!
//! Recomputes a downloaded file's digest and compares it against the value
//! published in the version metadata. Comparison is case-insensitive.

use crate::error::Result;
use crate::options::FetchOptions;
use crate::output;
use md5::Md5;
use sha1::{Digest, Sha1};
use std::io::Read;
use std::path::Path;

/// Chunk size for reading files during hashing (1MB)
const CHUNK_SIZE: usize = 1024 * 1024;

/// Digest algorithms published by the upstream metadata endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    Sha1,
    Md5,
}

impl ChecksumAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Md5 => "md5",
        }
    }

    /// Length of the hex-encoded digest for this algorithm.
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Sha1 => 40,
            Self::Md5 => 32,
        }
    }
}

/// Outcome of verifying one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyResult {
    /// Recomputed digest matches the published value.
    Verified,
    /// Digests differ. Fatal to the caller; the artifact stays on disk.
    Mismatch { expected: String, actual: String },
    /// No verification was possible. Non-fatal; callers warn and exit clean.
    Skipped(String),
}

/// Verify a file against an expected hex digest.
///
/// `expected = None` means upstream published no digest for this artifact;
/// that degrades to [`VerifyResult::Skipped`] rather than an error.
/// Verification is read-only and idempotent.
pub fn verify(
    path: &Path,
    expected: Option<&str>,
    algorithm: ChecksumAlgorithm,
    opts: &FetchOptions,
) -> Result<VerifyResult> {
    let Some(expected) = expected else {
        return Ok(VerifyResult::Skipped(
            "upstream metadata does not publish a checksum for this artifact".to_string(),
        ));
    };

    if !opts.quiet {
        output::detail(&format!(
            "verifying {} of {}",
            algorithm.name(),
            path.display()
        ));
    }

    let actual = match algorithm {
        ChecksumAlgorithm::Sha1 => hash_file::<Sha1>(path)?,
        ChecksumAlgorithm::Md5 => hash_file::<Md5>(path)?,
    };

    let expected = expected.to_lowercase();
    if actual == expected {
        Ok(VerifyResult::Verified)
    } else {
        Ok(VerifyResult::Mismatch { expected, actual })
    }
}

/// Stream a file through a digest and return the lowercase hex result.
fn hash_file<D: Digest>(path: &Path) -> Result<String> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = D::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
