use aws_sdk_dynamodb::operation::delete_table::DeleteTableOutput;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableOutput;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use tracing::debug;

use crate::clients::regional_config;
use crate::config::Config;
use crate::error::SdkCallError;

pub async fn describe_table(
    client: &DynamoDbClient,
    table_name: &str,
) -> Result<DescribeTableOutput, SdkCallError> {
    debug!("describing dynamodb table {}", table_name);
    client
        .describe_table()
        .table_name(table_name)
        .send()
        .await
        .map_err(|e| SdkCallError::DescribeTable {
            table_name: table_name.to_string(),
            error: e.into_service_error(),
        })
}

pub async fn remove_table(
    client: &DynamoDbClient,
    table_name: &str,
) -> Result<DeleteTableOutput, SdkCallError> {
    debug!("deleting dynamodb table {}", table_name);
    client
        .delete_table()
        .table_name(table_name)
        .send()
        .await
        .map_err(|e| SdkCallError::DeleteTable {
            table_name: table_name.to_string(),
            error: e.into_service_error(),
        })
}

async fn regional_client(region: &str) -> DynamoDbClient {
    DynamoDbClient::new(&regional_config(&Config::endpoint_from_env(), region).await)
}

pub async fn get_ddb_table(
    table_name: &str,
    region: &str,
) -> Result<DescribeTableOutput, SdkCallError> {
    describe_table(&regional_client(region).await, table_name).await
}

pub async fn get_table(table_name: &str, region: &str) -> Result<DescribeTableOutput, SdkCallError> {
    describe_table(&regional_client(region).await, table_name).await
}

pub async fn delete_table(
    table_name: &str,
    region: &str,
) -> Result<DeleteTableOutput, SdkCallError> {
    remove_table(&regional_client(region).await, table_name).await
}
