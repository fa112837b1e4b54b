// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::Region;

/// Client configuration.
#[derive(Debug, Default)]
pub struct ClientConfig {
    /// The bucket name that the client should report on.
    ///
    /// If this isn't given, all discovered S3 buckets will be reported.
    pub bucket_name: Option<String>,

    /// Maximum prefix depth to include in reports.
    ///
    /// A depth of 0 reports every prefix.
    pub max_depth: usize,

    /// Stop listing a bucket after this many objects.
    ///
    /// A limit of 0 lists every object. Mostly useful for sampling a
    /// very large bucket.
    pub object_limit: u64,

    /// The region that our AWS client should be created in.
    pub region: Region,
}
