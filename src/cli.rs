// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use clap::builder::PossibleValuesParser;
use clap::{
    crate_authors,
    crate_description,
    crate_name,
    crate_version,
    value_parser,
    Arg,
    ArgMatches,
    Command,
};
use tracing::debug;

// Default maximum report depth, 0 reports every prefix.
const DEFAULT_MAX_DEPTH: &str = "0";

// Default per bucket object limit, 0 lists every object.
const DEFAULT_OBJECT_LIMIT: &str = "0";

// Default display unit for sizes. Raw bytes keep the output identical
// to a plain listing.
const DEFAULT_UNIT: &str = "bytes";

// This should match the string values in the SizeUnit FromStr impl in
// common.
const VALID_UNITS: &[&str] = &[
    "binary",
    "bytes",
    "decimal",
];

// Create clap app
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("BUCKET")
                .value_name("BUCKET")
                .help("Report on just this bucket instead of every bucket")
        )
        .arg(
            Arg::new("MAX_DEPTH")
                .env("S3PDU_MAX_DEPTH")
                .hide_env_values(true)
                .long("max-depth")
                .short('d')
                .value_name("DEPTH")
                .help("Only report prefixes at most DEPTH segments deep, 0 reports everything")
                .default_value(DEFAULT_MAX_DEPTH)
                .value_parser(value_parser!(usize))
        )
        .arg(
            Arg::new("OBJECT_LIMIT")
                .env("S3PDU_OBJECT_LIMIT")
                .hide_env_values(true)
                .long("object-limit")
                .short('l')
                .value_name("LIMIT")
                .help("Stop listing a bucket after LIMIT objects, 0 lists everything")
                .default_value(DEFAULT_OBJECT_LIMIT)
                .value_parser(value_parser!(u64))
        )
        .arg(
            Arg::new("REGION")
                .env("AWS_REGION")
                .hide_env_values(true)
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("Set the AWS region to create the client in")
        )
        .arg(
            Arg::new("ENDPOINT")
                .env("S3PDU_ENDPOINT")
                .hide_env_values(true)
                .long("endpoint")
                .short('e')
                .value_name("URL")
                .help("Set a custom endpoint for S3 compatible services")
        )
        .arg(
            Arg::new("UNIT")
                .env("S3PDU_UNIT")
                .hide_env_values(true)
                .long("unit")
                .short('u')
                .value_name("UNIT")
                .help("Display sizes in this unit")
                .default_value(DEFAULT_UNIT)
                .value_parser(PossibleValuesParser::new(VALID_UNITS))
        )
}

/// Parse the command line arguments.
pub fn parse_args() -> ArgMatches {
    debug!("Parsing command line arguments");

    create_app().get_matches()
}
