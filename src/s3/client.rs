// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_s3::error::{
    DisplayErrorContext,
    ProvideErrorMetadata,
    SdkError,
};
use aws_sdk_s3::Client as S3Client;
use crate::common::{
    BucketNames,
    ClientConfig,
    Region,
    ScanError,
};
use crate::du::{
    ObjectRecord,
    PathAggregator,
};
use tracing::debug;

// Error codes that mean our credentials are the problem, rather than the
// request we made with them.
const AUTH_ERROR_CODES: &[&str] = &[
    "ExpiredToken",
    "InvalidAccessKeyId",
    "SignatureDoesNotMatch",
    "TokenRefreshRequired",
];

// Sort an SDK error into our ScanError categories.
fn classify_error<E>(error: SdkError<E>) -> ScanError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let message = DisplayErrorContext(&error).to_string();

    match &error {
        SdkError::ConstructionFailure(_) => ScanError::Authentication(message),
        SdkError::TimeoutError(_)
        | SdkError::DispatchFailure(_)   => ScanError::Transport(message),
        SdkError::ServiceError(context)  => {
            let code = context.err().meta().code();

            match code {
                Some(code) if AUTH_ERROR_CODES.contains(&code) => {
                    ScanError::Authentication(message)
                },
                _ => ScanError::Service(message),
            }
        },
        _ => ScanError::Service(message),
    }
}

/// The S3 `Client`.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,

    /// Selected bucket name, if any.
    pub bucket_name: Option<String>,

    /// Maximum prefix depth to include in reports, 0 reports everything.
    pub max_depth: usize,

    /// Stop listing a bucket after this many objects, 0 lists everything.
    pub object_limit: u64,

    /// `Region` that we're listing buckets in.
    pub region: Region,
}

impl Client {
    /// Return a new S3 `Client` with the given `ClientConfig`.
    pub async fn new(config: ClientConfig) -> Self {
        let region = config.region;

        debug!("new: Creating S3 client in region '{}'", region.name());

        let sdk_config = aws_config::from_env()
            .region(region.to_owned())
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);

        // Custom endpoints are S3 compatible services, which usually
        // want path style addressing.
        if let Some(endpoint) = region.endpoint() {
            builder = builder
                .endpoint_url(endpoint)
                .force_path_style(true);
        }

        let client = S3Client::from_conf(builder.build());

        Client {
            client:       client,
            bucket_name:  config.bucket_name,
            max_depth:    config.max_depth,
            object_limit: config.object_limit,
            region:       region,
        }
    }

    /// Returns a list of bucket names.
    pub async fn list_buckets(&self) -> Result<BucketNames, ScanError> {
        let output = self.client
            .list_buckets()
            .send()
            .await
            .map_err(classify_error)?;

        let bucket_names = match output.buckets() {
            Some(buckets) => {
                buckets
                    .iter()
                    .filter_map(|b| b.name().map(String::from))
                    .collect()
            },
            None => Vec::new(),
        };

        Ok(bucket_names)
    }

    /// List the current objects in `bucket`, feeding every (key, size)
    /// pair into a fresh `PathAggregator`.
    ///
    /// If listing fails part way through, the aggregator still holds
    /// everything ingested up to that point and the classified error is
    /// returned alongside it.
    pub async fn scan_objects(
        &self,
        bucket: &str,
    ) -> (PathAggregator, Option<ScanError>) {
        debug!("scan_objects for '{}'", bucket);

        let mut aggregator = PathAggregator::new();
        let mut continuation_token: Option<String> = None;

        // Loop until all objects are processed.
        loop {
            let output = self.client
                .list_objects_v2()
                .bucket(bucket)
                .set_continuation_token(continuation_token.take())
                .send()
                .await;

            let output = match output {
                Ok(output) => output,
                Err(error) => return (aggregator, Some(classify_error(error))),
            };

            if let Some(contents) = output.contents() {
                for object in contents {
                    let record = ObjectRecord {
                        key:  object.key().unwrap_or_default().to_string(),
                        size: u64::try_from(object.size()).unwrap_or(0),
                    };

                    aggregator.ingest(record);

                    if self.object_limit > 0
                        && aggregator.object_count() >= self.object_limit
                    {
                        debug!(
                            "scan_objects: object limit {} reached for '{}'",
                            self.object_limit,
                            bucket,
                        );

                        return (aggregator, None);
                    }
                }
            }

            // If the output was truncated we should have a
            // next_continuation_token, otherwise we're done.
            if output.is_truncated() {
                continuation_token = output
                    .next_continuation_token()
                    .map(String::from);
            }
            else {
                break;
            }
        }

        (aggregator, None)
    }
}
