use e2e_sdk_calls::SdkCallError;

// nothing listens on port 1, so a call that gets past configuration fails to connect
const CLOSED_ENDPOINT: &str = "http://127.0.0.1:1";

fn offline_env(log_retry_delay: &str) -> [(&'static str, Option<String>); 7] {
    [
        ("E2E_AWS_ENDPOINT_URL", Some(CLOSED_ENDPOINT.to_string())),
        ("E2E_LOG_RETRY_BASE_DELAY_MS", Some(log_retry_delay.to_string())),
        ("AWS_ACCESS_KEY_ID", Some("SOMETESTKEYID".to_string())),
        ("AWS_SECRET_ACCESS_KEY", Some("somesecretkey".to_string())),
        ("AWS_MAX_ATTEMPTS", Some("1".to_string())),
        ("AWS_EC2_METADATA_DISABLED", Some("true".to_string())),
        ("AWS_PROFILE", None),
    ]
}

#[tokio::test]
async fn test_log_read_rejects_bad_retry_delay() {
    temp_env::async_with_vars(offline_env("half-a-second"), async {
        let res = e2e_sdk_calls::get_cloudwatch_logs("us-east-1", "/aws/lambda/x", None).await;
        assert!(matches!(res, Err(SdkCallError::Config(_))), "got: {:?}", res);
    })
    .await;
}

#[tokio::test]
async fn test_other_calls_ignore_log_settings() {
    temp_env::async_with_vars(offline_env("half-a-second"), async {
        let res = e2e_sdk_calls::get_table("todo-dev", "us-east-1").await;
        match res {
            Err(SdkCallError::DescribeTable { table_name, .. }) => {
                assert_eq!(table_name, "todo-dev")
            }
            other => panic!("expected DescribeTable error, got {:?}", other),
        }

        let res = e2e_sdk_calls::check_if_bucket_exists("deployment-bucket", "us-east-1").await;
        assert!(
            matches!(res, Err(SdkCallError::HeadBucket { .. })),
            "got: {:?}",
            res
        );

        let res = e2e_sdk_calls::get_collection("faces", "us-east-1").await;
        assert!(
            matches!(res, Err(SdkCallError::DescribeCollection { .. })),
            "got: {:?}",
            res
        );
    })
    .await;
}

#[tokio::test]
async fn test_log_read_reaches_service_with_valid_settings() {
    temp_env::async_with_vars(offline_env("10"), async {
        let res = e2e_sdk_calls::get_cloudwatch_logs("us-east-1", "/aws/lambda/x", None).await;
        assert!(
            matches!(res, Err(SdkCallError::DescribeLogStreams { .. })),
            "got: {:?}",
            res
        );
    })
    .await;
}
