// Builds depth filtered, size ordered reports from prefix totals
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::{
    PathAggregator,
    PrefixTotals,
};
use rayon::prelude::*;

/// A single line of a report: a prefix and the cumulative size of
/// everything under it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportEntry {
    pub prefix: String,
    pub size:   u64,
}

/// The finished per-bucket report.
#[derive(Debug)]
pub struct BucketReport {
    pub bucket_name:  String,
    pub object_count: u64,
    pub entries:      Vec<ReportEntry>,
}

// Number of `/` delimited segments in a prefix. The empty segment left
// by a trailing separator isn't counted, so "a/" and "a.txt" are both
// depth 1 and "a/b/" is depth 2.
fn depth(prefix: &str) -> usize {
    prefix.trim_end_matches('/').split('/').count()
}

// Keep only prefixes at most max_depth segments deep. A max_depth of 0
// disables the filter.
fn filter_depth(totals: PrefixTotals, max_depth: usize) -> Vec<ReportEntry> {
    totals
        .into_iter()
        .filter(|(prefix, _)| max_depth == 0 || depth(prefix) <= max_depth)
        .map(|(prefix, size)| {
            ReportEntry {
                prefix: prefix,
                size:   size,
            }
        })
        .collect()
}

// Largest first. Equal sizes fall back to reverse lexicographic prefix
// order so the ordering is total and repeat builds are identical.
fn sort_entries(entries: &mut [ReportEntry]) {
    entries.par_sort_unstable_by(|a, b| {
        b.size
            .cmp(&a.size)
            .then_with(|| b.prefix.cmp(&a.prefix))
    });
}

impl BucketReport {
    /// Build the report for `bucket_name` from a finished aggregator.
    ///
    /// Entries deeper than `max_depth` are dropped, 0 disables the
    /// filter. Empty totals produce an empty report.
    pub fn build(
        aggregator:  PathAggregator,
        bucket_name: &str,
        max_depth:   usize,
    ) -> Self {
        let (totals, object_count) = aggregator.into_parts();

        let mut entries = filter_depth(totals, max_depth);
        sort_entries(&mut entries);

        BucketReport {
            bucket_name:  bucket_name.to_string(),
            object_count: object_count,
            entries:      entries,
        }
    }
}
