use aws_sdk_dynamodb::types::AttributeValue;
use chrono::Utc;
use dynamo_reader::{dynamodb::client::DynamodbClientBuilder, Config};
use std::env;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;
use ulid::Ulid;

/// Usage: put_item <name> [item-id]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut args = env::args().skip(1);
    let name = args
        .next()
        .ok_or(anyhow::anyhow!("usage: put_item <name> [item-id]"))?;
    let item_id = args.next().unwrap_or_else(|| Ulid::new().to_string());

    let config = Config::new()?;
    let table = config.table();

    let client = DynamodbClientBuilder::new()
        .await
        .region(config.region())
        .endpoint_url(config.endpoint_url())
        .build_sdk();

    let mut request = client
        .put_item()
        .table_name(table.name.as_str())
        .item(table.key_attribute.as_str(), AttributeValue::S(item_id.clone()))
        .item("Name", AttributeValue::S(name))
        .item("CreatedAt", AttributeValue::S(Utc::now().to_rfc3339()));

    if let Some(partition) = table.partition.as_ref() {
        request = request.item(
            partition.attribute.as_str(),
            AttributeValue::S(partition.value.clone()),
        );
    }

    match request.send().await {
        Ok(_) => info!("Put item: {item_id}"),
        Err(err) => error!("{:#?}", err),
    }

    Ok(())
}
