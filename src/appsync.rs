use aws_sdk_appsync::operation::get_graphql_api::GetGraphqlApiOutput;
use aws_sdk_appsync::Client as AppSyncClient;
use tracing::debug;

use crate::clients::regional_config;
use crate::config::Config;
use crate::error::SdkCallError;

pub async fn describe_graphql_api(
    client: &AppSyncClient,
    api_id: &str,
) -> Result<GetGraphqlApiOutput, SdkCallError> {
    debug!("getting appsync api {}", api_id);
    client
        .get_graphql_api()
        .api_id(api_id)
        .send()
        .await
        .map_err(|e| SdkCallError::GetGraphqlApi {
            api_id: api_id.to_string(),
            error: e.into_service_error(),
        })
}

pub async fn get_appsync_api(api_id: &str, region: &str) -> Result<GetGraphqlApiOutput, SdkCallError> {
    let client = AppSyncClient::new(&regional_config(&Config::endpoint_from_env(), region).await);
    describe_graphql_api(&client, api_id).await
}
