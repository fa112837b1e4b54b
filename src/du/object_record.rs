// Definition of an object record
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// A single object from a bucket listing.
///
/// Keys use `/` as a path separator. A key without any separator is a
/// root level object.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ObjectRecord {
    pub key:  String,
    pub size: u64,
}
