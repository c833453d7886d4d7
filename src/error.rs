use aws_sdk_appsync::operation::get_graphql_api::GetGraphqlApiError;
use aws_sdk_cloudwatchlogs::operation::describe_log_streams::DescribeLogStreamsError;
use aws_sdk_cloudwatchlogs::operation::get_log_events::GetLogEventsError;
use aws_sdk_cognitoidentityprovider::operation::describe_user_pool::DescribeUserPoolError;
use aws_sdk_cognitoidentityprovider::operation::describe_user_pool_client::DescribeUserPoolClientError;
use aws_sdk_dynamodb::operation::delete_table::DeleteTableError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_kinesis::operation::put_records::PutRecordsError;
use aws_sdk_lambda::operation::get_function::GetFunctionError;
use aws_sdk_lambda::operation::invoke::InvokeError;
#[allow(deprecated)]
use aws_sdk_lexmodelbuilding::operation::get_bot::GetBotError;
use aws_sdk_rekognition::operation::describe_collection::DescribeCollectionError;
use aws_sdk_s3::operation::head_bucket::HeadBucketError;

/// Failure of a single wrapped SDK call. Every variant keeps the identifier the call was
/// made for and the typed service error as its source, so callers can still ask e.g.
/// `is_not_found()`. Use `DisplayErrorContext` to print the whole chain.
#[allow(deprecated)]
#[derive(thiserror::Error, Debug)]
pub enum SdkCallError {
    #[error("invalid configuration - {0}")]
    Config(String),

    #[error("DescribeTable failed for table {table_name}")]
    DescribeTable {
        table_name: String,
        #[source]
        error: DescribeTableError,
    },

    #[error("DeleteTable failed for table {table_name}")]
    DeleteTable {
        table_name: String,
        #[source]
        error: DeleteTableError,
    },

    #[error("HeadBucket failed for bucket {bucket}")]
    HeadBucket {
        bucket: String,
        #[source]
        error: HeadBucketError,
    },

    #[error("DescribeUserPool failed for user pool {user_pool_id}")]
    DescribeUserPool {
        user_pool_id: String,
        #[source]
        error: DescribeUserPoolError,
    },

    #[error("DescribeUserPoolClient failed for client {client_id} in user pool {user_pool_id}")]
    DescribeUserPoolClient {
        user_pool_id: String,
        client_id: String,
        #[source]
        error: DescribeUserPoolClientError,
    },

    #[error("GetFunction failed for function {function_name}")]
    GetFunction {
        function_name: String,
        #[source]
        error: GetFunctionError,
    },

    #[error("Invoke failed for function {function_name}")]
    Invoke {
        function_name: String,
        #[source]
        error: InvokeError,
    },

    #[error("invoke payload is not valid json - {0}")]
    InvokePayload(#[from] serde_json::Error),

    #[error("GetBot failed for bot {bot_name}")]
    GetBot {
        bot_name: String,
        #[source]
        error: GetBotError,
    },

    #[error("DescribeCollection failed for collection {collection_id}")]
    DescribeCollection {
        collection_id: String,
        #[source]
        error: DescribeCollectionError,
    },

    #[error("GetGraphqlApi failed for api {api_id}")]
    GetGraphqlApi {
        api_id: String,
        #[source]
        error: GetGraphqlApiError,
    },

    #[error("DescribeLogStreams failed for log group {log_group_name}")]
    DescribeLogStreams {
        log_group_name: String,
        #[source]
        error: DescribeLogStreamsError,
    },

    #[error("GetLogEvents failed for {log_group_name}/{log_stream_name}")]
    GetLogEvents {
        log_group_name: String,
        log_stream_name: String,
        #[source]
        error: GetLogEventsError,
    },

    #[error("PutRecords failed for stream {stream_name}")]
    PutRecords {
        stream_name: String,
        #[source]
        error: PutRecordsError,
    },
}
