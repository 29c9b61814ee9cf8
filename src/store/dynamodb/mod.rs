//! DynamoDB-backed kitten store.

pub mod conversions;
pub mod expression;
pub mod provision;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::delete_item::builders::DeleteItemFluentBuilder;
use aws_sdk_dynamodb::operation::get_item::builders::GetItemFluentBuilder;
use aws_sdk_dynamodb::operation::put_item::builders::PutItemFluentBuilder;
use aws_sdk_dynamodb::operation::update_item::builders::UpdateItemFluentBuilder;

use super::{KittenStore, KittenUpdate, Result, StoreError};
use crate::config::Config;
use crate::models::Kitten;
use conversions::{
    NAME_ATTRIBUTE, items_to_kittens, kitten_to_item, name_key, optional_item_to_kitten,
};
use expression::UpdateExpression;

/// Shareable DynamoDB store for use across async handlers
#[derive(Clone)]
pub struct DynamoDbKittenStore {
    client: Client,
    table_name: String,
}

impl DynamoDbKittenStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Create a store from configuration
    ///
    /// Credentials and region come from the default AWS provider chain. When
    /// `DYNAMODB_ENDPOINT` is set the client talks to that endpoint instead
    /// and the table is created if it does not exist yet.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let region = RegionProviderChain::default_provider().or_else("us-east-1");
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

        match &config.dynamodb_endpoint {
            Some(endpoint) => {
                tracing::info!("Connecting to DynamoDB at: {}", endpoint);
                loader = loader.endpoint_url(endpoint);
            }
            None => tracing::info!("Connecting to AWS DynamoDB"),
        }

        let client = Client::new(&loader.load().await);

        if config.dynamodb_endpoint.is_some() {
            provision::ensure_table_exists(&client, &config.kitten_table).await?;
        }

        tracing::info!("Using DynamoDB table: {}", config.kitten_table);
        Ok(Self::new(client, config.kitten_table.clone()))
    }

    fn put_request(&self, kitten: &Kitten) -> PutItemFluentBuilder {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(kitten_to_item(kitten)))
    }

    fn get_request(&self, name: &str) -> GetItemFluentBuilder {
        self.client
            .get_item()
            .table_name(&self.table_name)
            .key(NAME_ATTRIBUTE, name_key(name))
    }

    fn update_request(&self, name: &str, update: &KittenUpdate) -> UpdateItemFluentBuilder {
        let expr = UpdateExpression::from_update(update);

        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(NAME_ATTRIBUTE, name_key(name))
            .update_expression(expr.expression)
            .set_expression_attribute_names(Some(expr.names))
            .set_expression_attribute_values(Some(expr.values))
    }

    fn delete_request(&self, name: &str) -> DeleteItemFluentBuilder {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(NAME_ATTRIBUTE, name_key(name))
    }
}

/// Wrap an SDK failure, keeping the full error chain for the log
fn request_error<E>(operation: &'static str, err: E) -> StoreError
where
    E: std::error::Error,
{
    StoreError::request(operation, DisplayErrorContext(&err))
}

#[async_trait]
impl KittenStore for DynamoDbKittenStore {
    async fn put(&self, kitten: &Kitten) -> Result<()> {
        self.put_request(kitten)
            .send()
            .await
            .map_err(|e| request_error("PutItem", e))?;

        tracing::debug!("Put kitten: {}", kitten.name);
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<Kitten>> {
        let output = self
            .get_request(name)
            .send()
            .await
            .map_err(|e| request_error("GetItem", e))?;

        optional_item_to_kitten(output.item)
    }

    async fn scan(&self) -> Result<Vec<Kitten>> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| request_error("Scan", e))?;

        if output.last_evaluated_key().is_some() {
            tracing::warn!(
                "Scan of {} returned a partial page, remaining kittens are not listed",
                self.table_name
            );
        }

        items_to_kittens(output.items)
    }

    async fn update(&self, name: &str, update: &KittenUpdate) -> Result<()> {
        self.update_request(name, update)
            .send()
            .await
            .map_err(|e| request_error("UpdateItem", e))?;

        tracing::debug!("Updated kitten: {}", name);
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.delete_request(name)
            .send()
            .await
            .map_err(|e| request_error("DeleteItem", e))?;

        tracing::debug!("Deleted kitten: {}", name);
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        self.client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| request_error("DescribeTable", e))?;

        Ok(())
    }
}
