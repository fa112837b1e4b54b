// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket;
mod bucket_scanner;
mod client_config;
mod human_size;
mod region;
mod scan_error;
mod size_unit;

pub use bucket::*;
pub use bucket_scanner::*;
pub use client_config::*;
pub use human_size::*;
pub use region::*;
pub use scan_error::*;
pub use size_unit::*;

/// Convenience type for a list of bucket names.
pub type BucketNames = Vec<String>;
