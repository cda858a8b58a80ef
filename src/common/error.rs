use thiserror::Error;

/// Catalog-scan errors
///
/// These never reach the HTTP client as status codes; the scan endpoint
/// converts any of them into an empty catalog. Per-entry problems (missing
/// manifests, failed placeholder writes) are handled inside the scan and
/// never surface here.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
