use aws_sdk_cognitoidentityprovider::operation::describe_user_pool::DescribeUserPoolOutput;
use aws_sdk_cognitoidentityprovider::operation::describe_user_pool_client::DescribeUserPoolClientOutput;
use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use aws_smithy_types::error::display::DisplayErrorContext;
use tracing::{debug, warn};

use crate::clients::regional_config;
use crate::config::Config;
use crate::error::SdkCallError;

pub async fn describe_user_pool(
    client: &CognitoClient,
    user_pool_id: &str,
) -> Result<DescribeUserPoolOutput, SdkCallError> {
    debug!("describing user pool {}", user_pool_id);
    client
        .describe_user_pool()
        .user_pool_id(user_pool_id)
        .send()
        .await
        .map_err(|e| SdkCallError::DescribeUserPool {
            user_pool_id: user_pool_id.to_string(),
            error: e.into_service_error(),
        })
}

pub async fn describe_user_pool_client(
    client: &CognitoClient,
    user_pool_id: &str,
    client_id: &str,
) -> Result<DescribeUserPoolClientOutput, SdkCallError> {
    debug!("describing user pool client {} in {}", client_id, user_pool_id);
    client
        .describe_user_pool_client()
        .user_pool_id(user_pool_id)
        .client_id(client_id)
        .send()
        .await
        .map_err(|e| SdkCallError::DescribeUserPoolClient {
            user_pool_id: user_pool_id.to_string(),
            client_id: client_id.to_string(),
            error: e.into_service_error(),
        })
}

/// Failures are logged and turned into `None`.
pub async fn find_user_pool(
    client: &CognitoClient,
    user_pool_id: &str,
) -> Option<DescribeUserPoolOutput> {
    describe_user_pool(client, user_pool_id)
        .await
        .map_err(|e| warn!("{}", DisplayErrorContext(&e)))
        .ok()
}

/// Describes each client in order. The first failure is logged and ends the walk; the
/// clients described before it are still returned.
pub async fn collect_user_pool_clients<S: AsRef<str>>(
    client: &CognitoClient,
    user_pool_id: &str,
    client_ids: &[S],
) -> Vec<DescribeUserPoolClientOutput> {
    let mut res = Vec::with_capacity(client_ids.len());
    for client_id in client_ids {
        match describe_user_pool_client(client, user_pool_id, client_id.as_ref()).await {
            Ok(output) => res.push(output),
            Err(e) => {
                warn!("{}", DisplayErrorContext(&e));
                break;
            }
        }
    }
    res
}

async fn regional_client(region: &str) -> CognitoClient {
    CognitoClient::new(&regional_config(&Config::endpoint_from_env(), region).await)
}

pub async fn get_user_pool(user_pool_id: &str, region: &str) -> Option<DescribeUserPoolOutput> {
    find_user_pool(&regional_client(region).await, user_pool_id).await
}

pub async fn get_user_pool_clients<S: AsRef<str>>(
    user_pool_id: &str,
    client_ids: &[S],
    region: &str,
) -> Vec<DescribeUserPoolClientOutput> {
    collect_user_pool_clients(&regional_client(region).await, user_pool_id, client_ids).await
}
