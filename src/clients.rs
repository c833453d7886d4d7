use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_appsync::Client as AppSyncClient;
use aws_sdk_cloudwatchlogs::Client as LogsClient;
use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_kinesis::Client as KinesisClient;
use aws_sdk_lambda::Client as LambdaClient;
use aws_sdk_lexmodelbuilding::Client as LexClient;
use aws_sdk_rekognition::Client as RekognitionClient;
use aws_sdk_s3::Client as S3Client;
use tracing::debug;

use crate::config::Config;

/// Loads the default credential chain with the region forced to `region`.
pub async fn regional_config(config: &Config, region: &str) -> SdkConfig {
    debug!("loading aws config for region {}", region);
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_owned()));
    if let Some(endpoint_url) = &config.endpoint_url {
        debug!("overriding aws endpoint with {}", endpoint_url);
        loader = loader.endpoint_url(endpoint_url);
    }
    loader.load().await
}

/// Standard retry mode with a fixed base backoff, used for log reads.
pub fn log_retry_config(config: &Config) -> RetryConfig {
    let retry = RetryConfig::standard().with_initial_backoff(config.log_retry_base_delay);
    match config.log_max_attempts {
        Some(attempts) => retry.with_max_attempts(attempts),
        None => retry,
    }
}

pub fn s3_client(sdk_config: &SdkConfig) -> S3Client {
    // custom endpoints (localstack) don't resolve virtual-hosted bucket names
    let s3_config = aws_sdk_s3::config::Builder::from(sdk_config)
        .force_path_style(sdk_config.endpoint_url().is_some())
        .build();
    S3Client::from_conf(s3_config)
}

pub fn logs_client(sdk_config: &SdkConfig, config: &Config) -> LogsClient {
    let logs_config = aws_sdk_cloudwatchlogs::config::Builder::from(sdk_config)
        .retry_config(log_retry_config(config))
        .build();
    LogsClient::from_conf(logs_config)
}

/// Every client the wrappers use, built for one region.
#[derive(Clone, Debug)]
pub struct AwsClients {
    pub dynamodb: DynamoDbClient,
    pub s3: S3Client,
    pub cognito: CognitoClient,
    pub lambda: LambdaClient,
    pub lex: LexClient,
    pub rekognition: RekognitionClient,
    pub appsync: AppSyncClient,
    pub logs: LogsClient,
    pub kinesis: KinesisClient,
}

impl AwsClients {
    pub fn new(sdk_config: &SdkConfig, config: &Config) -> Self {
        AwsClients {
            dynamodb: DynamoDbClient::new(sdk_config),
            s3: s3_client(sdk_config),
            cognito: CognitoClient::new(sdk_config),
            lambda: LambdaClient::new(sdk_config),
            lex: LexClient::new(sdk_config),
            rekognition: RekognitionClient::new(sdk_config),
            appsync: AppSyncClient::new(sdk_config),
            logs: logs_client(sdk_config, config),
            kinesis: KinesisClient::new(sdk_config),
        }
    }

    pub async fn for_region(config: &Config, region: &str) -> Self {
        let sdk_config = regional_config(config, region).await;
        AwsClients::new(&sdk_config, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_log_retry_config_uses_base_delay() {
        let retry = log_retry_config(&Config::default());
        assert_eq!(retry.initial_backoff(), Duration::from_millis(500));
        assert_eq!(retry.max_attempts(), RetryConfig::standard().max_attempts());
    }

    #[test]
    fn test_log_retry_config_max_attempts_override() {
        let config = Config {
            log_max_attempts: Some(7),
            ..Config::default()
        };
        assert_eq!(log_retry_config(&config).max_attempts(), 7);
    }

    #[test]
    fn test_logs_client_applies_retry_config() {
        let sdk_config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        let config = Config {
            log_max_attempts: Some(4),
            ..Config::default()
        };

        let client = logs_client(&sdk_config, &config);
        let retry = client
            .config()
            .retry_config()
            .expect("retry config on the logs client");
        assert_eq!(retry.initial_backoff(), Duration::from_millis(500));
        assert_eq!(retry.max_attempts(), 4);
    }

    #[tokio::test]
    async fn test_regional_config_forces_region() {
        let config = Config {
            endpoint_url: Some("http://localhost:4566".to_string()),
            ..Config::default()
        };
        let sdk_config = regional_config(&config, "ap-southeast-2").await;
        assert_eq!(
            sdk_config.region().map(|r| r.as_ref()),
            Some("ap-southeast-2")
        );
        assert_eq!(sdk_config.endpoint_url(), Some("http://localhost:4566"));

        let clients = AwsClients::new(&sdk_config, &config);
        assert_eq!(
            clients.kinesis.config().region().map(|r| r.as_ref()),
            Some("ap-southeast-2")
        );
    }
}
