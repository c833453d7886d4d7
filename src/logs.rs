use aws_sdk_cloudwatchlogs::types::OutputLogEvent;
use aws_sdk_cloudwatchlogs::Client as LogsClient;
use tracing::{debug, info};

use crate::clients::{logs_client, regional_config};
use crate::config::Config;
use crate::error::SdkCallError;

/// Name of the first stream of the group in descending order, if the group has any.
pub async fn latest_log_stream(
    client: &LogsClient,
    log_group_name: &str,
) -> Result<Option<String>, SdkCallError> {
    let resp = client
        .describe_log_streams()
        .log_group_name(log_group_name)
        .descending(true)
        .send()
        .await
        .map_err(|e| SdkCallError::DescribeLogStreams {
            log_group_name: log_group_name.to_string(),
            error: e.into_service_error(),
        })?;

    Ok(resp
        .log_streams()
        .first()
        .and_then(|stream| stream.log_stream_name())
        .map(str::to_string))
}

/// Reads the events of `log_stream_name`, or of the latest stream in the group when no
/// stream is given. A group without streams yields no events.
pub async fn read_log_events(
    client: &LogsClient,
    log_group_name: &str,
    log_stream_name: Option<&str>,
) -> Result<Vec<OutputLogEvent>, SdkCallError> {
    let target_stream_name = match log_stream_name {
        Some(name) => name.to_string(),
        None => match latest_log_stream(client, log_group_name).await? {
            Some(name) => name,
            None => {
                info!("log group {} has no streams", log_group_name);
                return Ok(Vec::new());
            }
        },
    };

    debug!("reading log events from {}/{}", log_group_name, target_stream_name);
    let resp = client
        .get_log_events()
        .log_group_name(log_group_name)
        .log_stream_name(&target_stream_name)
        .send()
        .await
        .map_err(|e| SdkCallError::GetLogEvents {
            log_group_name: log_group_name.to_string(),
            log_stream_name: target_stream_name.clone(),
            error: e.into_service_error(),
        })?;

    Ok(resp.events.unwrap_or_default())
}

pub async fn get_cloudwatch_logs(
    region: &str,
    log_group_name: &str,
    log_stream_name: Option<&str>,
) -> Result<Vec<OutputLogEvent>, SdkCallError> {
    let config = Config::load_from_env().map_err(SdkCallError::Config)?;
    let client = logs_client(&regional_config(&config, region).await, &config);
    read_log_events(&client, log_group_name, log_stream_name).await
}
