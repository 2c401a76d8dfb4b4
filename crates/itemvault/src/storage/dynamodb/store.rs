//! DynamoDB-backed key-value store.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;

use itemvault_core::item::Item;
use itemvault_core::storage::{KeyValueStore, StoreError, StoreResult};

use super::conversions::{attributes_to_item, item_to_attributes};
use super::error::{
    is_resource_not_found, map_delete_item_error, map_describe_table_error, map_get_item_error,
    map_put_item_error,
};
use crate::storage::provision::{probe_with_retry, Probe};

/// Attribute holding the partition key.
const KEY_ATTRIBUTE: &str = "id";

/// Single-table store for item records, keyed by the item id.
pub struct DynamoKeyValueStore {
    client: Client,
    table_name: String,
}

impl DynamoKeyValueStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Probes table existence, keeping "missing" distinct from transient
    /// failures so only the latter consume retry attempts.
    async fn probe_table(&self) -> StoreResult<Probe> {
        match self
            .client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
        {
            Ok(_) => Ok(Probe::Exists),
            Err(err) if is_resource_not_found(&err) => Ok(Probe::Missing),
            Err(err) => Err(map_describe_table_error(err)),
        }
    }

    /// Creates the items table and blocks until it reports ACTIVE.
    async fn create_table(&self) -> StoreResult<()> {
        let key_schema = KeySchemaElement::builder()
            .attribute_name(KEY_ATTRIBUTE)
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| StoreError::Provisioning(e.to_string()))?;

        let attribute_definition = AttributeDefinition::builder()
            .attribute_name(KEY_ATTRIBUTE)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(|e| StoreError::Provisioning(e.to_string()))?;

        self.client
            .create_table()
            .table_name(&self.table_name)
            .key_schema(key_schema)
            .attribute_definitions(attribute_definition)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(|e| StoreError::Provisioning(e.to_string()))?;

        self.wait_for_table_active().await
    }

    async fn wait_for_table_active(&self) -> StoreResult<()> {
        let max_attempts = 60;
        let delay = Duration::from_secs(2);

        for _ in 0..max_attempts {
            let response = self
                .client
                .describe_table()
                .table_name(&self.table_name)
                .send()
                .await
                .map_err(|e| StoreError::Provisioning(e.to_string()))?;

            let status = response.table().and_then(|table| table.table_status());
            if status == Some(&TableStatus::Active) {
                return Ok(());
            }
            tokio::time::sleep(delay).await;
        }

        Err(StoreError::Provisioning(format!(
            "table {} did not become active",
            self.table_name
        )))
    }
}

#[async_trait]
impl KeyValueStore for DynamoKeyValueStore {
    async fn ensure_ready(&self) -> StoreResult<()> {
        let resource = format!("table {}", self.table_name);
        match probe_with_retry(&resource, || self.probe_table()).await? {
            Probe::Exists => Ok(()),
            Probe::Missing => {
                tracing::info!(table = %self.table_name, "Creating items table");
                self.create_table().await
            }
        }
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(attributes) => Ok(Some(attributes_to_item(&attributes)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, item: &Item) -> StoreResult<()> {
        // Unconditional upsert: existence checks belong to the service.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        // DeleteItem on an absent key succeeds, which matches the
        // "absence is not an error" contract.
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
