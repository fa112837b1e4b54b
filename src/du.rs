// Imports all of the components needed for prefix disk usage
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Accumulates object sizes into per-prefix totals.
mod aggregator;

/// A single (key, size) record from a bucket listing.
mod object_record;

/// Depth filtered, size ordered usage reports.
mod report;

pub use aggregator::*;
pub use object_record::*;
pub use report::*;
