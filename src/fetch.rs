//! JSON metadata fetching and field projection.
//!
//! Every remote lookup in the resolution pipeline goes through
//! [`fetch_json`], and every field access goes through the projection
//! helpers here, so transport, parse, and missing-field failures surface as
//! one error variant each.

use crate::error::{Error, Result};
use crate::options::FetchOptions;
use crate::output;
use serde_json::Value;

/// User-Agent sent with every request
pub(crate) const USER_AGENT: &str = concat!("mcjar/", env!("CARGO_PKG_VERSION"));

/// Fetch a URL and parse the response body as JSON.
pub fn fetch_json(url: &str, opts: &FetchOptions) -> Result<Value> {
    if opts.verbose {
        output::detail(&format!("fetching {}", url));
    }

    let response = ureq::get(url)
        .timeout(opts.timeout)
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| match e {
            ureq::Error::Status(code, _) => {
                Error::Network(format!("{} returned status {}", url, code))
            }
            ureq::Error::Transport(t) => Error::Network(t.to_string()),
        })?;

    response
        .into_json::<Value>()
        .map_err(|e| Error::Parse(format!("{}: {}", url, e)))
}

/// Project a dotted field path into a document.
///
/// # Example
/// ```
/// # use serde_json::json;
/// let doc = json!({"downloads": {"server": {"url": "https://example/server.jar"}}});
/// let url = mcjar::fetch::extract(&doc, "downloads.server.url").unwrap();
/// assert_eq!(url.as_str(), Some("https://example/server.jar"));
/// ```
pub fn extract<'a>(doc: &'a Value, path: &str) -> Result<&'a Value> {
    let mut current = doc;
    for segment in path.split('.') {
        current = current
            .get(segment)
            .ok_or_else(|| Error::FieldNotFound(path.to_string()))?;
    }
    Ok(current)
}

/// Project a dotted field path and require a string value.
pub fn extract_str<'a>(doc: &'a Value, path: &str) -> Result<&'a str> {
    extract(doc, path)?
        .as_str()
        .ok_or_else(|| Error::Parse(format!("field '{}' is not a string", path)))
}

/// Project a dotted field path, treating absence as `None`.
///
/// For fields the active strategy does not strictly require.
pub fn optional_str(doc: &Value, path: &str) -> Result<Option<String>> {
    match extract(doc, path) {
        Ok(v) => v
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| Error::Parse(format!("field '{}' is not a string", path))),
        Err(Error::FieldNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Select the array element whose `key` field equals `wanted`.
pub fn find_by_field<'a>(array: &'a Value, key: &str, wanted: &str) -> Result<&'a Value> {
    let entries = array
        .as_array()
        .ok_or_else(|| Error::Parse("expected a JSON array".to_string()))?;

    entries
        .iter()
        .find(|e| e.get(key).and_then(Value::as_str) == Some(wanted))
        .ok_or_else(|| Error::FieldNotFound(format!("[{}={}]", key, wanted)))
}

/// Flatten an object whose values are arrays of strings into one sequence.
pub fn flatten_string_arrays(doc: &Value) -> Result<Vec<String>> {
    let map = doc
        .as_object()
        .ok_or_else(|| Error::Parse("expected a JSON object".to_string()))?;

    let mut out = Vec::new();
    for values in map.values() {
        let arr = values
            .as_array()
            .ok_or_else(|| Error::Parse("expected array-valued fields".to_string()))?;
        for v in arr {
            out.push(
                v.as_str()
                    .ok_or_else(|| Error::Parse("expected string array elements".to_string()))?
                    .to_string(),
            );
        }
    }
    Ok(out)
}
