//! Table provisioning for local DynamoDB.

use std::time::Duration;

use anyhow::{Context, Result};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType, TableStatus,
};

use super::conversions::NAME_ATTRIBUTE;

const ACTIVATION_ATTEMPTS: u32 = 30;
const ACTIVATION_DELAY: Duration = Duration::from_millis(500);

/// Ensure the kitten table exists, creating it if necessary
///
/// The table is keyed on `name` (string) with on-demand billing. This only
/// runs against an overridden endpoint, so a fresh local DynamoDB works
/// without any setup.
pub async fn ensure_table_exists(client: &Client, table_name: &str) -> Result<()> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(_) => {
            tracing::info!("Table already exists: {}", table_name);
            Ok(())
        }
        Err(err)
            if matches!(
                err.as_service_error(),
                Some(DescribeTableError::ResourceNotFoundException(_))
            ) =>
        {
            tracing::info!("Table not found, creating: {}", table_name);
            create_table(client, table_name).await?;
            wait_for_table_active(client, table_name).await?;
            tracing::info!("Table created successfully: {}", table_name);
            Ok(())
        }
        Err(err) => Err(anyhow::anyhow!(
            "Failed to check table existence: {}",
            DisplayErrorContext(&err)
        )),
    }
}

async fn create_table(client: &Client, table_name: &str) -> Result<()> {
    let key_schema = KeySchemaElement::builder()
        .attribute_name(NAME_ATTRIBUTE)
        .key_type(KeyType::Hash)
        .build()
        .context("Invalid key schema")?;

    let attribute_definition = AttributeDefinition::builder()
        .attribute_name(NAME_ATTRIBUTE)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .context("Invalid attribute definition")?;

    client
        .create_table()
        .table_name(table_name)
        .key_schema(key_schema)
        .attribute_definitions(attribute_definition)
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create table: {}", DisplayErrorContext(&e)))?;

    Ok(())
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    for _ in 0..ACTIVATION_ATTEMPTS {
        let output = client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to describe table: {}", DisplayErrorContext(&e)))?;

        let status = output.table().and_then(|table| table.table_status());
        if status == Some(&TableStatus::Active) {
            return Ok(());
        }

        tokio::time::sleep(ACTIVATION_DELAY).await;
    }

    anyhow::bail!("Table {} did not become active in time", table_name)
}
