use aws_sdk_lambda::operation::get_function::GetFunctionOutput;
use aws_sdk_lambda::operation::invoke::InvokeOutput;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::Client as LambdaClient;
use aws_smithy_types::error::display::DisplayErrorContext;
use tracing::{debug, warn};

use crate::clients::regional_config;
use crate::config::Config;
use crate::error::SdkCallError;

pub async fn describe_function(
    client: &LambdaClient,
    function_name: &str,
) -> Result<GetFunctionOutput, SdkCallError> {
    debug!("getting lambda function {}", function_name);
    client
        .get_function()
        .function_name(function_name)
        .send()
        .await
        .map_err(|e| SdkCallError::GetFunction {
            function_name: function_name.to_string(),
            error: e.into_service_error(),
        })
}

/// Synchronous invoke. A function error is reported through `function_error` on the
/// output, not as `Err`.
pub async fn invoke(
    client: &LambdaClient,
    function_name: &str,
    payload: &str,
) -> Result<InvokeOutput, SdkCallError> {
    debug!("invoking lambda function {}", function_name);
    let output = client
        .invoke()
        .function_name(function_name)
        .payload(Blob::new(payload.as_bytes()))
        .send()
        .await
        .map_err(|e| SdkCallError::Invoke {
            function_name: function_name.to_string(),
            error: e.into_service_error(),
        })?;

    if let Some(function_error) = output.function_error() {
        debug!("function {} returned {}", function_name, function_error);
    }
    Ok(output)
}

/// Decodes the invoke response payload; `None` when there is no payload.
pub fn invoke_payload_json(
    output: &InvokeOutput,
) -> Result<Option<serde_json::Value>, SdkCallError> {
    match output.payload() {
        Some(blob) if !blob.as_ref().is_empty() => Ok(Some(serde_json::from_slice(blob.as_ref())?)),
        _ => Ok(None),
    }
}

async fn regional_client(region: &str) -> LambdaClient {
    LambdaClient::new(&regional_config(&Config::endpoint_from_env(), region).await)
}

/// Like [`describe_function`] but failures are logged and turned into `None`.
pub async fn find_function(client: &LambdaClient, function_name: &str) -> Option<GetFunctionOutput> {
    describe_function(client, function_name)
        .await
        .map_err(|e| warn!("{}", DisplayErrorContext(&e)))
        .ok()
}

pub async fn get_lambda_function(function_name: &str, region: &str) -> Option<GetFunctionOutput> {
    find_function(&regional_client(region).await, function_name).await
}

pub async fn get_function(
    function_name: &str,
    region: &str,
) -> Result<GetFunctionOutput, SdkCallError> {
    describe_function(&regional_client(region).await, function_name).await
}

pub async fn invoke_function(
    function_name: &str,
    payload: &str,
    region: &str,
) -> Result<InvokeOutput, SdkCallError> {
    invoke(&regional_client(region).await, function_name, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_payload_json() {
        let output = InvokeOutput::builder()
            .status_code(200)
            .payload(Blob::new(r#"{"statusCode":200,"body":"hello"}"#))
            .build();
        let value = invoke_payload_json(&output).unwrap().unwrap();
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"], "hello");
    }

    #[test]
    fn test_invoke_payload_json_empty() {
        let output = InvokeOutput::builder().status_code(202).build();
        assert!(invoke_payload_json(&output).unwrap().is_none());

        let output = InvokeOutput::builder()
            .status_code(200)
            .payload(Blob::new(""))
            .build();
        assert!(invoke_payload_json(&output).unwrap().is_none());
    }

    #[test]
    fn test_invoke_payload_json_invalid() {
        let output = InvokeOutput::builder()
            .status_code(200)
            .payload(Blob::new("not json"))
            .build();
        assert!(matches!(
            invoke_payload_json(&output),
            Err(SdkCallError::InvokePayload(_))
        ));
    }
}
