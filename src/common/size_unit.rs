// SizeUnit
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use humansize::{
    FormatSizeOptions,
    BINARY,
    DECIMAL,
};
use once_cell::sync::Lazy;
use std::str::FromStr;

// We remove the space from the humansize output so that our own output
// is sortable by `sort -h`.
/// The same as `humansize::BINARY` with the space removed.
static SIZE_UNIT_BINARY: Lazy<FormatSizeOptions> = Lazy::new(|| {
    BINARY.space_after_value(false)
});

/// The same as `humansize::DECIMAL` with the space removed.
static SIZE_UNIT_DECIMAL: Lazy<FormatSizeOptions> = Lazy::new(|| {
    DECIMAL.space_after_value(false)
});

/// `SizeUnit` represents how we want the prefix sizes to be displayed.
#[derive(Clone, Debug)]
pub enum SizeUnit {
    /// Represent sizes as human readable using SI units (multiples of
    /// 1024).
    Binary(FormatSizeOptions),

    /// Represent sizes as the number of bytes.
    Bytes,

    /// Represent sizes as human readable using non-SI units (multiples
    /// of 1000).
    Decimal(FormatSizeOptions),
}

/// This converts from the string arguments we receive on the command
/// line to our enum type.
impl FromStr for SizeUnit {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary"  => Ok(Self::Binary(*SIZE_UNIT_BINARY)),
            "bytes"   => Ok(Self::Bytes),
            "decimal" => Ok(Self::Decimal(*SIZE_UNIT_DECIMAL)),
            _         => Err("no match"),
        }
    }
}
