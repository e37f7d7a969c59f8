//! Forge installer strategy
//!
//! Resolves a Forge spec against the promotions table, then derives the
//! installer URL from the long `<mc-version>-<build>` identifier. Promotion
//! lookup runs three ordered tiers, short-circuiting on the first match:
//! exact promotion key, `<input>-latest` key, then pass-through for inputs
//! that are already long versions.

use super::{DownloadTarget, Outcome, ResolutionStrategy};
use crate::checksum::ChecksumAlgorithm;
use crate::error::{Error, Result};
use crate::fetch::{extract, fetch_json, flatten_string_arrays, optional_str};
use crate::options::FetchOptions;
use crate::output;
use serde_json::Value;

/// Forge metadata site (promotions, version index, per-version meta)
const DEFAULT_FILES_BASE: &str = "https://files.minecraftforge.net/net/minecraftforge/forge";

/// Forge maven repository (installer artifacts)
const DEFAULT_MAVEN_BASE: &str = "https://maven.minecraftforge.net/net/minecraftforge/forge";

pub struct ForgeStrategy {
    files_base: String,
    maven_base: String,
    opts: FetchOptions,
}

impl ForgeStrategy {
    pub fn new(opts: FetchOptions) -> Self {
        Self::with_bases(DEFAULT_FILES_BASE, DEFAULT_MAVEN_BASE, opts)
    }

    /// Point the strategy at alternative endpoints (used by tests).
    pub fn with_bases(
        files_base: impl Into<String>,
        maven_base: impl Into<String>,
        opts: FetchOptions,
    ) -> Self {
        Self {
            files_base: files_base.into(),
            maven_base: maven_base.into(),
            opts,
        }
    }

    fn promotions_url(&self) -> String {
        format!("{}/promotions_slim.json", self.files_base)
    }

    fn index_url(&self) -> String {
        format!("{}/maven-metadata.json", self.files_base)
    }

    fn meta_url(&self, long_version: &str) -> String {
        format!("{}/{}/meta.json", self.files_base, long_version)
    }
}

impl ResolutionStrategy for ForgeStrategy {
    fn resolve(&self, input: &str) -> Result<Outcome> {
        if input == "list" {
            return Ok(Outcome::Listing(self.list()?));
        }

        let promotions = fetch_json(&self.promotions_url(), &self.opts)?;
        let promos = extract(&promotions, "promos")?;

        let long_version = resolve_long_version(promos, input);
        if self.opts.verbose && long_version != input {
            output::detail(&format!("{} -> {}", input, long_version));
        }

        let meta = fetch_json(&self.meta_url(&long_version), &self.opts)?;
        // The installer digest lives under `classifiers.installer.jar`; the
        // field name notwithstanding, the value is an MD5 hex digest.
        let md5 = optional_str(&meta, "classifiers.installer.jar")?;

        let file_name = format!("forge-{}-installer.jar", long_version);
        let url = format!("{}/{}/{}", self.maven_base, long_version, file_name);

        Ok(Outcome::Target(DownloadTarget::new(
            url,
            md5,
            ChecksumAlgorithm::Md5,
            file_name,
        )?))
    }

    /// The flattened full version index followed by every promotion key.
    fn list(&self) -> Result<Vec<String>> {
        let index = fetch_json(&self.index_url(), &self.opts)?;
        let mut out = flatten_string_arrays(&index)?;

        let promotions = fetch_json(&self.promotions_url(), &self.opts)?;
        let promos = extract(&promotions, "promos")?
            .as_object()
            .ok_or_else(|| Error::Parse("'promos' is not an object".to_string()))?;
        out.extend(promos.keys().cloned());

        Ok(out)
    }
}

/// Derive the long `<mc-version>-<build>` identifier for an input spec.
///
/// Tier order is significant: exact promotion key beats the `-latest`
/// suffixed key, which beats treating the input as already long. The first
/// matching tier wins; later tiers are never consulted.
fn resolve_long_version(promos: &Value, input: &str) -> String {
    let tiers = [try_exact, try_suffixed];
    tiers
        .iter()
        .find_map(|tier| tier(promos, input))
        .unwrap_or_else(|| input.to_string())
}

/// Exact promotion key, e.g. input `1.18.2-recommended` against
/// `promos["1.18.2-recommended"]`. The long version pairs the numeric
/// portion of the input with the promoted build.
fn try_exact(promos: &Value, input: &str) -> Option<String> {
    let build = promos.get(input)?.as_str()?;
    Some(format!("{}-{}", numeric_prefix(input), build))
}

/// Suffixed promotion key, e.g. input `1.18.2` against
/// `promos["1.18.2-latest"]`.
fn try_suffixed(promos: &Value, input: &str) -> Option<String> {
    let build = promos.get(format!("{}-latest", input).as_str())?.as_str()?;
    Some(format!("{}-{}", input, build))
}

/// First maximal run of digits and dots in the input.
fn numeric_prefix(input: &str) -> &str {
    let is_numeric = |c: char| c.is_ascii_digit() || c == '.';
    let Some(start) = input.find(is_numeric) else {
        return input;
    };
    let run = &input[start..];
    let end = run.find(|c| !is_numeric(c)).unwrap_or(run.len());
    &run[..end]
}
