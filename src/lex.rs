// Lex V1 model building is deprecated in the SDK but still serves V1 bots.
#![allow(deprecated)]

use aws_sdk_lexmodelbuilding::operation::get_bot::GetBotOutput;
use aws_sdk_lexmodelbuilding::Client as LexClient;
use tracing::debug;

use crate::clients::regional_config;
use crate::config::Config;
use crate::error::SdkCallError;

pub const LATEST_VERSION: &str = "$LATEST";

pub async fn describe_bot(client: &LexClient, bot_name: &str) -> Result<GetBotOutput, SdkCallError> {
    debug!("getting lex bot {} ({})", bot_name, LATEST_VERSION);
    client
        .get_bot()
        .name(bot_name)
        .version_or_alias(LATEST_VERSION)
        .send()
        .await
        .map_err(|e| SdkCallError::GetBot {
            bot_name: bot_name.to_string(),
            error: e.into_service_error(),
        })
}

pub async fn get_bot(bot_name: &str, region: &str) -> Result<GetBotOutput, SdkCallError> {
    let client = LexClient::new(&regional_config(&Config::endpoint_from_env(), region).await);
    describe_bot(&client, bot_name).await
}
