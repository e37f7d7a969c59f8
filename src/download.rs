//! Artifact download
//!
//! Streams a resolved URL to disk with a progress bar that upgrades from a
//! spinner to a byte bar once the content length is known.

use crate::error::{Error, Result};
use crate::fetch::USER_AGENT;
use crate::options::FetchOptions;
use crate::output;
use std::io::{Read, Write};
use std::path::Path;

/// Download `url` to `dest`, returning the number of bytes written.
///
/// Creates or truncates the destination. A partial file is left in place on
/// failure.
pub fn download(url: &str, dest: &Path, opts: &FetchOptions) -> Result<u64> {
    let file_name = dest
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "download".to_string());

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

    let pb = (!opts.quiet).then(|| output::spinner(&format!("downloading {}", file_name)));

    if let Some(pb) = &pb {
        if let Some(len) = response
            .header("content-length")
            .and_then(|s| s.parse().ok())
        {
            output::upgrade_to_bytes(pb, len);
        }
    }

    let mut file = std::fs::File::create(dest)?;
    let mut reader = response.into_reader();
    let mut buffer = [0u8; 8192];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| Error::Network(format!("read error: {}", e)))?;
        if bytes_read == 0 {
            break;
        }

        file.write_all(&buffer[..bytes_read])?;

        total_bytes += bytes_read as u64;
        if let Some(pb) = &pb {
            pb.set_position(total_bytes);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    Ok(total_bytes)
}
