// Definition of a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Represents an S3 bucket.
#[derive(Debug)]
pub struct Bucket {
    pub name: String,
}

/// Convenience type for a list of `Bucket`.
pub type Buckets = Vec<Bucket>;
