// HumanSize trait and implementations
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::SizeUnit;
use humansize::format_size;
use tracing::debug;

/// `HumanSize` trait.
pub trait HumanSize {
    /// Return `self` as a human friendly size if requested by `unit`.
    fn humansize(&self, unit: &SizeUnit) -> String;
}

/// `HumanSize` trait implementation for `u64`.
impl HumanSize for u64 {
    fn humansize(&self, unit: &SizeUnit) -> String {
        debug!("humansize: size {}, unit {:?}", self, unit);

        match unit {
            SizeUnit::Binary(options)  => format_size(*self, *options),
            SizeUnit::Bytes            => self.to_string(),
            SizeUnit::Decimal(options) => format_size(*self, *options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_humansize() {
        let tests = vec![
            (0,    "binary",  "0B"),
            (1024, "binary",  "1KiB"),
            (1,    "bytes",   "1"),
            (1024, "decimal", "1.02kB"),
        ];

        for test in tests {
            let size: u64 = test.0;
            let unit      = SizeUnit::from_str(test.1).unwrap();
            let expected  = test.2;

            let ret = size.humansize(&unit);

            assert_eq!(ret, expected);
        }
    }
}
