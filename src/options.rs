//! Per-invocation options threaded into each component call.
//!
//! Quiet/verbose travel as an explicit value rather than ambient global
//! state, so library callers and tests control output the same way the CLI
//! does.

use std::time::Duration;

/// Default HTTP timeout in seconds
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Options passed into every fetch, download, and verify call.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Suppress progress bars and detail lines.
    pub quiet: bool,
    /// Print extra resolution detail (fetched URLs, substituted tokens).
    pub verbose: bool,
    /// Timeout applied to every HTTP request.
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            quiet: false,
            verbose: false,
            timeout: http_timeout(None),
        }
    }
}

/// Resolve the HTTP timeout from an optional user-supplied value.
///
/// Clamped to a reasonable range (5-300 seconds).
pub fn http_timeout(secs: Option<u64>) -> Duration {
    Duration::from_secs(secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS).clamp(5, 300))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout_is_reasonable() {
        let timeout = http_timeout(None);
        assert!(timeout.as_secs() >= 5);
        assert!(timeout.as_secs() <= 300);
    }

    #[test]
    fn test_timeout_clamped_low() {
        assert_eq!(http_timeout(Some(1)), Duration::from_secs(5));
    }

    #[test]
    fn test_timeout_clamped_high() {
        assert_eq!(http_timeout(Some(10_000)), Duration::from_secs(300));
    }

    #[test]
    fn test_timeout_passthrough() {
        assert_eq!(http_timeout(Some(60)), Duration::from_secs(60));
    }
}
