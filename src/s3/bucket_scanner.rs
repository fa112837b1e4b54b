// Implement the BucketScanner trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use crate::common::{
    Bucket,
    Buckets,
    BucketScanner,
    ScanError,
    ScanOutcome,
};
use crate::du::BucketReport;
use super::client::Client;
use tracing::debug;

#[async_trait]
impl BucketScanner for Client {
    /// Return `Buckets` discovered in S3.
    ///
    /// This list of buckets will also be filtered by the `bucket`
    /// argument provided on the command line, if any.
    async fn buckets(&self) -> Result<Buckets, ScanError> {
        debug!("buckets: Listing...");

        let mut bucket_names = self.list_buckets().await?;

        // If we were provided with a specific bucket name on the CLI,
        // filter out buckets that don't match.
        if let Some(bucket_name) = self.bucket_name.as_ref() {
            debug!("Filtering bucket list for '{}'", bucket_name);

            bucket_names.retain(|b| b == bucket_name);
        }

        let buckets = bucket_names
            .into_iter()
            .map(|name| Bucket { name: name })
            .collect();

        Ok(buckets)
    }

    /// Aggregate the per-prefix usage of `bucket` into its report.
    ///
    /// A listing that fails part way through still yields a report for
    /// everything ingested so far, with the failure attached.
    async fn scan(&self, bucket: &Bucket) -> ScanOutcome {
        debug!("scan: Aggregating prefixes for '{}'", bucket.name);

        let (aggregator, interrupted) = self.scan_objects(&bucket.name).await;

        let report = BucketReport::build(
            aggregator,
            &bucket.name,
            self.max_depth,
        );

        debug!(
            "scan: '{}' has {} objects over {} reported prefixes",
            report.bucket_name,
            report.object_count,
            report.entries.len(),
        );

        ScanOutcome {
            report:      report,
            interrupted: interrupted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::client::Client as S3Client;
    use aws_sdk_s3::config::Config as S3Config;
    use aws_sdk_s3::config::Credentials;
    use aws_smithy_client::erase::DynConnector;
    use aws_smithy_client::test_connection::TestConnection;
    use aws_smithy_http::body::SdkBody;
    use crate::common::Region;
    use crate::du::ReportEntry;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;

    // Create a mock S3 client, returning the data from the specified
    // data files in order.
    fn mock_client(data_files: Vec<&str>) -> Client {
        let events = data_files
            .iter()
            .map(|file| {
                let path = Path::new("test-data").join(file);
                let data = fs::read_to_string(path).unwrap();

                (
                    http::Request::builder()
                        .body(SdkBody::from("request body"))
                        .unwrap(),

                    http::Response::builder()
                        .status(200)
                        .body(SdkBody::from(data))
                        .unwrap(),
                )
            })
            .collect();

        let conn = TestConnection::new(events);
        let conn = DynConnector::new(conn);

        let creds = Credentials::from_keys(
            "ATESTCLIENT",
            "atestsecretkey",
            Some("atestsessiontoken".to_string()),
        );

        let conf = S3Config::builder()
            .credentials_provider(creds)
            .http_connector(conn)
            .region(aws_sdk_s3::config::Region::new("eu-west-1"))
            .build();

        let client = S3Client::from_conf(conf);

        Client {
            client:       client,
            bucket_name:  None,
            max_depth:    0,
            object_limit: 0,
            region:       Region::new().set_region("eu-west-1"),
        }
    }

    #[tokio::test]
    async fn test_buckets() {
        let client = mock_client(vec!["s3-list-buckets.xml"]);

        let buckets = client.buckets().await.unwrap();

        let mut buckets: Vec<String> = buckets
            .iter()
            .map(|b| b.name.to_owned())
            .collect();

        buckets.sort();

        let expected = vec![
            "a-bucket-name",
            "another-bucket-name",
        ];

        assert_eq!(buckets, expected);
    }

    #[tokio::test]
    async fn test_buckets_filtered() {
        let mut client = mock_client(vec!["s3-list-buckets.xml"]);

        client.bucket_name = Some("a-bucket-name".into());

        let buckets = client.buckets().await.unwrap();

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].name, "a-bucket-name");
    }

    #[tokio::test]
    async fn test_scan() {
        let mut client = mock_client(vec!["s3-list-objects.xml"]);

        client.max_depth = 1;

        let bucket = Bucket {
            name: "test-bucket".into(),
        };

        let outcome = client.scan(&bucket).await;

        assert!(outcome.interrupted.is_none());

        let report = outcome.report;

        assert_eq!(report.bucket_name, "test-bucket");
        assert_eq!(report.object_count, 3);

        // At depth 1 only readme.txt and a/ survive, largest first.
        let expected = vec![
            ReportEntry {
                prefix: "readme.txt".into(),
                size:   100,
            },
            ReportEntry {
                prefix: "a/".into(),
                size:   30,
            },
        ];

        assert_eq!(report.entries, expected);
    }

    #[tokio::test]
    async fn test_scan_unlimited_depth() {
        let client = mock_client(vec!["s3-list-objects.xml"]);

        let bucket = Bucket {
            name: "test-bucket".into(),
        };

        let outcome = client.scan(&bucket).await;
        let report  = outcome.report;

        // max_depth of 0 reports every prefix. The 30 byte tie between
        // a/ and a/b/ resolves to reverse lexicographic order.
        let expected = vec![
            ReportEntry {
                prefix: "readme.txt".into(),
                size:   100,
            },
            ReportEntry {
                prefix: "a/b/".into(),
                size:   30,
            },
            ReportEntry {
                prefix: "a/".into(),
                size:   30,
            },
        ];

        assert_eq!(report.entries, expected);
    }
}
