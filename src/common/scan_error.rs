// Classified errors from the bucket scanning clients
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use thiserror::Error;

/// Failures raised while talking to the object storage service.
///
/// The prefix aggregation itself has no failure modes, everything here
/// originates in the external client.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Credentials were missing or rejected. Fatal, the user has to
    /// reconfigure before anything will work.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The remote API rejected or errored a request. Reported per
    /// bucket, other buckets carry on.
    #[error("service error: {0}")]
    Service(String),

    /// We couldn't reach the service at all. Any retry policy belongs
    /// to the SDK, not to us.
    #[error("transport error: {0}")]
    Transport(String),
}
