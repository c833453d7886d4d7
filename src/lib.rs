//! Thin wrappers around single AWS SDK calls, used by end-to-end tests to check that
//! provisioned resources exist and behave.
//!
//! Each operation comes in two forms: one taking an already built client, and one taking a
//! region that builds a fresh client for that region from the default credential chain.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub mod appsync;
pub mod clients;
pub mod cognito;
pub mod config;
pub mod dynamodb;
pub mod error;
pub mod kinesis;
pub mod lambda;
pub mod lex;
pub mod logs;
pub mod rekognition;
pub mod s3;

pub use appsync::get_appsync_api;
pub use clients::AwsClients;
pub use cognito::{get_user_pool, get_user_pool_clients};
pub use dynamodb::{delete_table, get_ddb_table, get_table};
pub use error::SdkCallError;
pub use kinesis::put_kinesis_records;
pub use lambda::{get_function, get_lambda_function, invoke_function, invoke_payload_json};
pub use lex::get_bot;
pub use logs::get_cloudwatch_logs;
pub use rekognition::get_collection;
pub use s3::check_if_bucket_exists;

/// Installs the fmt subscriber. Safe to call more than once; later calls are no-ops.
pub fn set_up_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .try_init();
}
