// s3pdu: A tool for informing you of the space used per key prefix in
// AWS S3 buckets.
#![forbid(unsafe_code)]
use anyhow::{
    Context,
    Result,
};
use clap::ArgMatches;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

mod cli;
mod common;
mod du;
mod s3;

use common::{
    BucketScanner,
    ClientConfig,
    HumanSize,
    Region,
    ScanOutcome,
    SizeUnit,
};

// Assemble the client configuration from the parsed command line.
fn client_config(matches: &ArgMatches) -> ClientConfig {
    let bucket_name = matches
        .get_one::<String>("BUCKET")
        .map(String::from);

    let mut region = Region::new();

    if let Some(name) = matches.get_one::<String>("REGION") {
        region = region.set_region(name);
    }

    if let Some(url) = matches.get_one::<String>("ENDPOINT") {
        region = region.set_endpoint(url);
    }

    let max_depth = matches
        .get_one::<usize>("MAX_DEPTH")
        .copied()
        .unwrap_or(0);

    let object_limit = matches
        .get_one::<u64>("OBJECT_LIMIT")
        .copied()
        .unwrap_or(0);

    ClientConfig {
        bucket_name:  bucket_name,
        max_depth:    max_depth,
        object_limit: object_limit,
        region:       region,
    }
}

// Print a finished bucket report in the sorted order it was built in.
fn print_report(outcome: &ScanOutcome, unit: &SizeUnit) {
    let report = &outcome.report;

    println!("bucket: {}", report.bucket_name);
    println!("objects: {}", report.object_count);

    for entry in &report.entries {
        println!("{} : {}", entry.size.humansize(unit), entry.prefix);
    }

    // A partial report is still printed above, but never silently.
    if let Some(error) = &outcome.interrupted {
        eprintln!(
            "warning: listing of '{}' was interrupted, totals are partial: {}",
            report.bucket_name,
            error,
        );
    }
}

async fn run(config: ClientConfig, unit: SizeUnit) -> Result<()> {
    let client = Arc::new(s3::Client::new(config).await);

    let buckets = client.buckets()
        .await
        .context("Failed to list buckets")?;

    println!("{} Amazon S3 bucket(s) detected.", buckets.len());

    // One task per bucket. Each bucket's aggregation owns its own
    // state, so the scans can run concurrently without coordination.
    let scans: Vec<_> = buckets
        .into_iter()
        .map(|bucket| {
            let client = Arc::clone(&client);

            tokio::spawn(async move {
                client.scan(&bucket).await
            })
        })
        .collect();

    // Await in spawn order so the output order matches the bucket
    // listing.
    for scan in scans {
        let outcome = scan.await?;

        print_report(&outcome, &unit);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let matches = cli::parse_args();

    let config = client_config(&matches);

    let unit = match matches.get_one::<String>("UNIT") {
        Some(unit) => SizeUnit::from_str(unit).map_err(anyhow::Error::msg)?,
        None       => SizeUnit::Bytes,
    };

    debug!("Running with {:?}, displaying sizes as {:?}", config, unit);

    run(config, unit).await
}
