use aws_sdk_s3::operation::head_bucket::HeadBucketOutput;
use aws_sdk_s3::Client as S3Client;
use tracing::debug;

use crate::clients::{regional_config, s3_client};
use crate::config::Config;
use crate::error::SdkCallError;

pub async fn head_bucket(client: &S3Client, bucket: &str) -> Result<HeadBucketOutput, SdkCallError> {
    debug!("checking s3 bucket {}", bucket);
    client
        .head_bucket()
        .bucket(bucket)
        .send()
        .await
        .map_err(|e| SdkCallError::HeadBucket {
            bucket: bucket.to_string(),
            error: e.into_service_error(),
        })
}

/// Errors with `HeadBucket` when the bucket is missing or not accessible.
pub async fn check_if_bucket_exists(
    bucket_name: &str,
    region: &str,
) -> Result<HeadBucketOutput, SdkCallError> {
    let client = s3_client(&regional_config(&Config::endpoint_from_env(), region).await);
    head_bucket(&client, bucket_name).await
}
