//! Version resolution
//!
//! Maps a user-supplied version token through one or more remote metadata
//! documents to a concrete download URL plus its published checksum. Two
//! strategies share the [`ResolutionStrategy`] contract: the vanilla
//! distribution (Mojang version manifest) and the Forge installer (promotions
//! plus maven metadata). The dispatcher picks one by prefix.

mod forge;
mod vanilla;

pub use forge::ForgeStrategy;
pub use vanilla::VanillaStrategy;

use crate::checksum::ChecksumAlgorithm;
use crate::error::{Error, Result};
use crate::options::FetchOptions;

/// Token prefix that routes to the Forge strategy.
pub const FORGE_PREFIX: &str = "forge:";

/// The fully resolved result of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    /// Concrete artifact URL.
    pub url: String,
    /// Published hex digest, when upstream provides one.
    pub checksum: Option<String>,
    /// Digest algorithm the checksum was published for.
    pub algorithm: ChecksumAlgorithm,
    /// Local file name to write the artifact to.
    pub file_name: String,
}

impl DownloadTarget {
    /// Build a target, validating that the checksum agrees with the
    /// algorithm (40 hex chars for sha1, 32 for md5). The upstream data is
    /// trusted, but a length mismatch means we mis-read the document.
    pub fn new(
        url: String,
        checksum: Option<String>,
        algorithm: ChecksumAlgorithm,
        file_name: String,
    ) -> Result<Self> {
        if let Some(sum) = &checksum {
            if sum.len() != algorithm.hex_len() || !sum.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(Error::Parse(format!(
                    "{} checksum '{}' should be {} hex characters",
                    algorithm.name(),
                    sum,
                    algorithm.hex_len()
                )));
            }
        }
        Ok(Self {
            url,
            checksum,
            algorithm,
            file_name,
        })
    }
}

/// What a resolution produced: an artifact to download, or a listing that
/// terminates the invocation without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Target(DownloadTarget),
    Listing(Vec<String>),
}

/// One way of narrowing a version token to a concrete artifact.
pub trait ResolutionStrategy {
    /// Resolve a token to a download target or a listing.
    fn resolve(&self, token: &str) -> Result<Outcome>;

    /// Enumerate every identifier this strategy knows about, in index order.
    fn list(&self) -> Result<Vec<String>>;
}

/// Route a token to the strategy its prefix selects and resolve it.
pub fn dispatch(token: &str, opts: &FetchOptions) -> Result<Outcome> {
    match token.strip_prefix(FORGE_PREFIX) {
        Some(rest) => ForgeStrategy::new(opts.clone()).resolve(rest),
        None => VanillaStrategy::new(opts.clone()).resolve(token),
    }
}
