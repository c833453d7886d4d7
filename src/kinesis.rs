use aws_sdk_kinesis::operation::put_records::PutRecordsOutput;
use aws_sdk_kinesis::primitives::Blob;
use aws_sdk_kinesis::types::PutRecordsRequestEntry;
use aws_sdk_kinesis::Client as KinesisClient;
use tracing::{debug, warn};

use crate::clients::regional_config;
use crate::config::Config;
use crate::error::SdkCallError;

fn single_entry(data: &str, partition_key: &str) -> Result<PutRecordsRequestEntry, SdkCallError> {
    PutRecordsRequestEntry::builder()
        .data(Blob::new(data.as_bytes()))
        .partition_key(partition_key)
        .build()
        .map_err(|e| SdkCallError::Config(format!("invalid kinesis record - {}", e)))
}

/// Puts one record. Per-record failures are left in the output for the caller to inspect.
pub async fn put_record(
    client: &KinesisClient,
    data: &str,
    partition_key: &str,
    stream_name: &str,
) -> Result<PutRecordsOutput, SdkCallError> {
    debug!("putting record to kinesis stream {}", stream_name);
    let output = client
        .put_records()
        .records(single_entry(data, partition_key)?)
        .stream_name(stream_name)
        .send()
        .await
        .map_err(|e| SdkCallError::PutRecords {
            stream_name: stream_name.to_string(),
            error: e.into_service_error(),
        })?;

    if let Some(failed) = output.failed_record_count().filter(|n| *n > 0) {
        warn!("{} record(s) rejected by kinesis stream {}", failed, stream_name);
    }
    Ok(output)
}

pub async fn put_kinesis_records(
    data: &str,
    partition_key: &str,
    stream_name: &str,
    region: &str,
) -> Result<PutRecordsOutput, SdkCallError> {
    let client = KinesisClient::new(&regional_config(&Config::endpoint_from_env(), region).await);
    put_record(&client, data, partition_key, stream_name).await
}
