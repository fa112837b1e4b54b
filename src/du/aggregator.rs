// PathAggregator, accumulates object sizes into per-prefix totals
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::ObjectRecord;
use std::collections::HashMap;

/// Mapping from key prefix to the cumulative size of everything under it.
pub type PrefixTotals = HashMap<String, u64>;

/// Builds `PrefixTotals` for a single bucket, one object at a time.
///
/// Every `/` terminated ancestor of a key receives the full object size.
/// A key with no separator contributes its whole name as a top level
/// entry with no trailing separator, so flat objects compete with
/// directory style prefixes in the same totals.
#[derive(Debug, Default)]
pub struct PathAggregator {
    totals:       PrefixTotals,
    object_count: u64,
}

impl PathAggregator {
    /// Return a new, empty `PathAggregator`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `record.size` to the running total of every prefix of
    /// `record.key`, and count the record.
    ///
    /// An empty key is accepted, it yields a single empty string prefix.
    pub fn ingest(&mut self, record: ObjectRecord) {
        self.object_count += 1;

        let segments: Vec<&str> = record.key.split('/').collect();

        // A key with no separator is reported under its own name, with
        // no trailing separator. Everything else gets one prefix per
        // ancestor, each ending in the separator.
        let (levels, separator) = if segments.len() > 1 {
            (segments.len() - 1, "/")
        }
        else {
            (1, "")
        };

        let mut prefix = String::with_capacity(record.key.len());

        for segment in segments.iter().take(levels) {
            prefix.push_str(segment);
            prefix.push_str(separator);

            *self.totals.entry(prefix.clone()).or_insert(0) += record.size;
        }
    }

    /// Number of objects ingested so far.
    pub fn object_count(&self) -> u64 {
        self.object_count
    }

    /// The per-prefix totals accumulated so far.
    pub fn totals(&self) -> &PrefixTotals {
        &self.totals
    }

    /// Consume the aggregator, returning the totals and the object count.
    pub fn into_parts(self) -> (PrefixTotals, u64) {
        (self.totals, self.object_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ingest_all(records: &[(&str, u64)]) -> PathAggregator {
        let mut aggregator = PathAggregator::new();

        for (key, size) in records {
            let record = ObjectRecord {
                key:  key.to_string(),
                size: *size,
            };

            aggregator.ingest(record);
        }

        aggregator
    }

    fn totals(expected: &[(&str, u64)]) -> PrefixTotals {
        expected
            .iter()
            .map(|(prefix, size)| (prefix.to_string(), *size))
            .collect()
    }

    #[test]
    fn test_ingest_no_separator() {
        let aggregator = ingest_all(&[
            ("readme.txt", 100),
        ]);

        let expected = totals(&[
            ("readme.txt", 100),
        ]);

        assert_eq!(aggregator.totals(), &expected);
        assert_eq!(aggregator.object_count(), 1);
    }

    #[test]
    fn test_ingest_nested() {
        let aggregator = ingest_all(&[
            ("a/b/c.txt", 10),
            ("a/b/d.txt", 20),
        ]);

        let expected = totals(&[
            ("a/",   30),
            ("a/b/", 30),
        ]);

        assert_eq!(aggregator.totals(), &expected);
        assert_eq!(aggregator.object_count(), 2);
    }

    #[test]
    fn test_ingest_mixed() {
        let aggregator = ingest_all(&[
            ("x/y/z.txt", 5),
            ("w.txt",     50),
        ]);

        let expected = totals(&[
            ("x/",    5),
            ("x/y/",  5),
            ("w.txt", 50),
        ]);

        assert_eq!(aggregator.totals(), &expected);
        assert_eq!(aggregator.object_count(), 2);
    }

    #[test]
    fn test_ingest_rollup() {
        // Every prefix ends up with the sum of everything nested under
        // it, however deep.
        let aggregator = ingest_all(&[
            ("a/b/c/d/e.bin", 1),
            ("a/b/c/f.bin",   2),
            ("a/g.bin",       4),
            ("a/b/h.bin",     8),
        ]);

        let expected = totals(&[
            ("a/",       15),
            ("a/b/",     11),
            ("a/b/c/",   3),
            ("a/b/c/d/", 1),
        ]);

        assert_eq!(aggregator.totals(), &expected);
        assert_eq!(aggregator.object_count(), 4);
    }

    #[test]
    fn test_ingest_empty_key() {
        // A malformed key is accepted and counted, not an error.
        let aggregator = ingest_all(&[
            ("", 7),
        ]);

        let expected = totals(&[
            ("", 7),
        ]);

        assert_eq!(aggregator.totals(), &expected);
        assert_eq!(aggregator.object_count(), 1);
    }

    #[test]
    fn test_object_count() {
        // The count follows records ingested, not prefixes produced.
        let aggregator = ingest_all(&[
            ("a/b/c/d/e.bin", 0),
            ("flat",          0),
            ("",              0),
        ]);

        assert_eq!(aggregator.object_count(), 3);
    }
}
