#![allow(dead_code)]

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_credential_types::Credentials;
use aws_smithy_runtime::client::http::test_util::{ReplayEvent, StaticReplayClient};
use aws_smithy_types::body::SdkBody;

pub const REGION: &str = "us-east-1";

// the replay client ignores the request, only the canned response matters
fn any_request() -> http::Request<SdkBody> {
    http::Request::builder()
        .uri(format!("https://example.{}.amazonaws.com/", REGION))
        .body(SdkBody::from(""))
        .unwrap()
}

pub fn ok_json(body: &str) -> ReplayEvent {
    ReplayEvent::new(
        any_request(),
        http::Response::builder()
            .status(200)
            .header("content-type", "application/json")
            .body(SdkBody::from(body.to_string()))
            .unwrap(),
    )
}

pub fn ok_with_headers(headers: &[(&str, &str)], body: &str) -> ReplayEvent {
    let mut response = http::Response::builder().status(200);
    for (name, value) in headers {
        response = response.header(*name, *value);
    }
    ReplayEvent::new(
        any_request(),
        response.body(SdkBody::from(body.to_string())).unwrap(),
    )
}

/// An error response understood by both the json rpc and rest json protocols.
pub fn service_error(status: u16, error_type: &str, message: &str) -> ReplayEvent {
    ReplayEvent::new(
        any_request(),
        http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .header("x-amzn-errortype", error_type)
            .body(SdkBody::from(format!(
                r#"{{"__type":"{}","message":"{}"}}"#,
                error_type, message
            )))
            .unwrap(),
    )
}

pub fn empty_status(status: u16) -> ReplayEvent {
    ReplayEvent::new(
        any_request(),
        http::Response::builder()
            .status(status)
            .body(SdkBody::from(""))
            .unwrap(),
    )
}

// get_mock_sdk_config returns shared config whose clients answer with the given events in order
pub fn get_mock_sdk_config(events: Vec<ReplayEvent>) -> SdkConfig {
    SdkConfig::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(REGION))
        .credentials_provider(SharedCredentialsProvider::new(Credentials::new(
            "SOMETESTKEYID",
            "somesecretkey",
            Some("somesessiontoken".to_string()),
            None,
            "",
        )))
        .http_client(StaticReplayClient::new(events))
        .build()
}
