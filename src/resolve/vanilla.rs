//! Vanilla distribution strategy
//!
//! Resolves against the Mojang version manifest: token → manifest entry →
//! per-version metadata → `downloads.server` URL and sha1.

use super::{DownloadTarget, Outcome, ResolutionStrategy};
use crate::checksum::ChecksumAlgorithm;
use crate::error::{Error, Result};
use crate::fetch::{extract, extract_str, fetch_json, find_by_field, optional_str};
use crate::options::FetchOptions;
use crate::output;
use serde_json::Value;

/// Mojang's top-level version manifest
const DEFAULT_MANIFEST_URL: &str =
    "https://launchermeta.mojang.com/mc/game/version_manifest.json";

/// Fixed destination name for the server artifact
const SERVER_JAR: &str = "server.jar";

pub struct VanillaStrategy {
    manifest_url: String,
    opts: FetchOptions,
}

impl VanillaStrategy {
    pub fn new(opts: FetchOptions) -> Self {
        Self::with_manifest_url(DEFAULT_MANIFEST_URL, opts)
    }

    /// Point the strategy at an alternative manifest (used by tests).
    pub fn with_manifest_url(url: impl Into<String>, opts: FetchOptions) -> Self {
        Self {
            manifest_url: url.into(),
            opts,
        }
    }

    /// Map the reserved `latest` / `latest-snapshot` keywords through the
    /// manifest's release pointers; anything else is taken literally.
    fn target_id(&self, manifest: &Value, token: &str) -> Result<String> {
        let id = match token {
            "latest" => extract_str(manifest, "latest.release")?,
            "latest-snapshot" => extract_str(manifest, "latest.snapshot")?,
            other => other,
        };
        if self.opts.verbose && id != token {
            output::detail(&format!("{} -> {}", token, id));
        }
        Ok(id.to_string())
    }
}

impl ResolutionStrategy for VanillaStrategy {
    fn resolve(&self, token: &str) -> Result<Outcome> {
        if token == "list" {
            return Ok(Outcome::Listing(self.list()?));
        }

        let manifest = fetch_json(&self.manifest_url, &self.opts)?;

        match token {
            "list-latest" => {
                let id = extract_str(&manifest, "latest.release")?;
                return Ok(Outcome::Listing(vec![id.to_string()]));
            }
            "list-latest-snapshot" => {
                let id = extract_str(&manifest, "latest.snapshot")?;
                return Ok(Outcome::Listing(vec![id.to_string()]));
            }
            _ => {}
        }

        let id = self.target_id(&manifest, token)?;

        let versions = extract(&manifest, "versions")?;
        let entry = match find_by_field(versions, "id", &id) {
            Ok(entry) => entry,
            Err(Error::FieldNotFound(_)) => return Err(Error::UnknownVersion(id)),
            Err(e) => return Err(e),
        };

        let meta_url = extract_str(entry, "url")?;
        let meta = fetch_json(meta_url, &self.opts)?;

        let url = extract_str(&meta, "downloads.server.url")?.to_string();
        let sha1 = optional_str(&meta, "downloads.server.sha1")?;

        Ok(Outcome::Target(DownloadTarget::new(
            url,
            sha1,
            ChecksumAlgorithm::Sha1,
            SERVER_JAR.to_string(),
        )?))
    }

    /// All version identifiers, preserving manifest order.
    fn list(&self) -> Result<Vec<String>> {
        let manifest = fetch_json(&self.manifest_url, &self.opts)?;
        let versions = extract(&manifest, "versions")?
            .as_array()
            .ok_or_else(|| Error::Parse("manifest 'versions' is not an array".to_string()))?;

        versions
            .iter()
            .map(|entry| extract_str(entry, "id").map(str::to_string))
            .collect()
    }
}
