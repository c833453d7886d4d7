use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use e2e_sdk_calls::clients::{logs_client, regional_config};
use e2e_sdk_calls::config::Config;
use e2e_sdk_calls::{
    appsync, cognito, dynamodb, kinesis, lambda, lex, logs, rekognition, s3, AwsClients,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "e2e-sdk-calls", about = "Probe provisioned AWS resources")]
struct Cli {
    /// Region the resource lives in
    #[arg(long, env = "AWS_REGION")]
    region: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Describe a DynamoDB table
    Table { table_name: String },
    /// Delete a DynamoDB table
    DeleteTable { table_name: String },
    /// HeadBucket on an S3 bucket
    Bucket { bucket_name: String },
    /// Describe a Cognito user pool
    UserPool { user_pool_id: String },
    /// Describe user pool clients, in order
    UserPoolClients {
        user_pool_id: String,
        #[arg(required = true)]
        client_ids: Vec<String>,
    },
    /// Get the $LATEST version of a Lex bot
    Bot { bot_name: String },
    /// Get a Lambda function
    Function { function_name: String },
    /// Invoke a Lambda function synchronously
    Invoke {
        function_name: String,
        #[arg(default_value = "{}")]
        payload: String,
    },
    /// Describe a Rekognition collection
    Collection { collection_id: String },
    /// Get an AppSync GraphQL API
    AppsyncApi { api_id: String },
    /// Read events from a log stream (latest stream when none is given)
    Logs {
        log_group_name: String,
        log_stream_name: Option<String>,
    },
    /// Put a single record on a Kinesis stream
    KinesisPut {
        stream_name: String,
        partition_key: String,
        data: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    e2e_sdk_calls::set_up_logging();

    let cli = Cli::parse();
    info!(
        "Initializing {} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let clients = AwsClients::for_region(&Config::endpoint_from_env(), &cli.region).await;

    match cli.command {
        Command::Table { table_name } => {
            let out = dynamodb::describe_table(&clients.dynamodb, &table_name).await?;
            println!("{:#?}", out);
        }
        Command::DeleteTable { table_name } => {
            let out = dynamodb::remove_table(&clients.dynamodb, &table_name).await?;
            println!("{:#?}", out);
        }
        Command::Bucket { bucket_name } => {
            let out = s3::head_bucket(&clients.s3, &bucket_name).await?;
            println!("{:#?}", out);
        }
        Command::UserPool { user_pool_id } => {
            let out = cognito::describe_user_pool(&clients.cognito, &user_pool_id).await?;
            println!("{:#?}", out);
        }
        Command::UserPoolClients {
            user_pool_id,
            client_ids,
        } => {
            let out =
                cognito::collect_user_pool_clients(&clients.cognito, &user_pool_id, &client_ids)
                    .await;
            if out.len() != client_ids.len() {
                anyhow::bail!(
                    "described {} of {} user pool clients",
                    out.len(),
                    client_ids.len()
                );
            }
            println!("{:#?}", out);
        }
        Command::Bot { bot_name } => {
            let out = lex::describe_bot(&clients.lex, &bot_name).await?;
            println!("{:#?}", out);
        }
        Command::Function { function_name } => {
            let out = lambda::describe_function(&clients.lambda, &function_name).await?;
            println!("{:#?}", out);
        }
        Command::Invoke {
            function_name,
            payload,
        } => {
            let out = lambda::invoke(&clients.lambda, &function_name, &payload).await?;
            match lambda::invoke_payload_json(&out)? {
                Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                None => println!("{:#?}", out),
            }
            if let Some(function_error) = out.function_error() {
                anyhow::bail!("function {} failed: {}", function_name, function_error);
            }
        }
        Command::Collection { collection_id } => {
            let out = rekognition::describe_collection(&clients.rekognition, &collection_id).await?;
            println!("{:#?}", out);
        }
        Command::AppsyncApi { api_id } => {
            let out = appsync::describe_graphql_api(&clients.appsync, &api_id).await?;
            println!("{:#?}", out);
        }
        Command::Logs {
            log_group_name,
            log_stream_name,
        } => {
            let log_config = Config::load_from_env().map_err(anyhow::Error::msg)?;
            let client = logs_client(
                &regional_config(&log_config, &cli.region).await,
                &log_config,
            );
            let events =
                logs::read_log_events(&client, &log_group_name, log_stream_name.as_deref())
                    .await
                    .with_context(|| format!("reading logs of {}", log_group_name))?;
            for event in events {
                println!("{}", event.message().unwrap_or_default());
            }
        }
        Command::KinesisPut {
            stream_name,
            partition_key,
            data,
        } => {
            let out =
                kinesis::put_record(&clients.kinesis, &data, &partition_key, &stream_name).await?;
            println!("{:#?}", out);
        }
    }

    Ok(())
}
