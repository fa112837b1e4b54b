// BucketScanner trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use super::{
    Bucket,
    Buckets,
    ScanError,
};
use crate::du::BucketReport;

/// The result of scanning one bucket.
///
/// If listing was interrupted part way through, `report` still covers
/// everything ingested before the interruption and `interrupted` holds
/// the error. A partial report is never silently dropped.
#[derive(Debug)]
pub struct ScanOutcome {
    pub report:      BucketReport,
    pub interrupted: Option<ScanError>,
}

/// `BucketScanner` represents the required methods to list S3 buckets
/// and aggregate their per-prefix usage.
///
/// This trait should be implemented by all `Client`s performing these
/// tasks.
#[async_trait]
pub trait BucketScanner {
    /// Returns the buckets to report on.
    async fn buckets(&self) -> Result<Buckets, ScanError>;

    /// Streams the objects of `bucket` through a fresh aggregator and
    /// builds its report.
    async fn scan(&self, bucket: &Bucket) -> ScanOutcome;
}
