use aws_sdk_rekognition::operation::describe_collection::DescribeCollectionOutput;
use aws_sdk_rekognition::Client as RekognitionClient;
use tracing::debug;

use crate::clients::regional_config;
use crate::config::Config;
use crate::error::SdkCallError;

pub async fn describe_collection(
    client: &RekognitionClient,
    collection_id: &str,
) -> Result<DescribeCollectionOutput, SdkCallError> {
    debug!("describing rekognition collection {}", collection_id);
    client
        .describe_collection()
        .collection_id(collection_id)
        .send()
        .await
        .map_err(|e| SdkCallError::DescribeCollection {
            collection_id: collection_id.to_string(),
            error: e.into_service_error(),
        })
}

pub async fn get_collection(
    collection_id: &str,
    region: &str,
) -> Result<DescribeCollectionOutput, SdkCallError> {
    let client = RekognitionClient::new(&regional_config(&Config::endpoint_from_env(), region).await);
    describe_collection(&client, collection_id).await
}
