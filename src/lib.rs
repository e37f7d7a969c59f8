//! Fetch and verify Minecraft server jars and Forge installers
//!
//! `mcjar` resolves a human version token (`1.18.2`, `latest`,
//! `latest-snapshot`, `forge:1.18.2`, ...) into a concrete artifact URL plus
//! its published checksum, downloads the artifact, and verifies it.
//!
//! The pipeline runs in three stages:
//!
//! 1. [`resolve::dispatch`] routes the token to a [`resolve::ResolutionStrategy`]
//!    (vanilla manifest or Forge promotions) which chains JSON metadata
//!    lookups down to a [`resolve::DownloadTarget`].
//! 2. [`download::download`] streams the artifact to disk.
//! 3. [`checksum::verify`] recomputes the digest and compares.
//!
//! Everything is blocking and sequential; a single invocation performs a
//! handful of dependent HTTP GETs and writes exactly one file.
//!
//! # Example
//!
//! ```no_run
//! use mcjar::{checksum, download, resolve, FetchOptions, Outcome};
//! use std::path::Path;
//!
//! # fn main() -> mcjar::Result<()> {
//! let opts = FetchOptions::default();
//! if let Outcome::Target(target) = resolve::dispatch("1.18.2", &opts)? {
//!     let dest = Path::new(".").join(&target.file_name);
//!     download::download(&target.url, &dest, &opts)?;
//!     checksum::verify(&dest, target.checksum.as_deref(), target.algorithm, &opts)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod checksum;
pub mod download;
pub mod error;
pub mod fetch;
pub mod options;
pub mod output;
pub mod resolve;

pub use checksum::{ChecksumAlgorithm, VerifyResult};
pub use error::{Error, Result};
pub use options::FetchOptions;
pub use resolve::{dispatch, DownloadTarget, Outcome, ResolutionStrategy};
