use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;

use super::{RecordStore, ServiceError};
use crate::models::ParticipationRecord;

/// Attribute holding the session date; the table predates the record type.
const SESSION_DATE_ATTRIBUTE: &str = "class_meeting_date";

pub struct DynamoRecordStore {
    client: Client,
    table: String,
}

impl DynamoRecordStore {
    pub fn new(sdk_config: &aws_config::SdkConfig, table: String) -> Self {
        Self {
            client: Client::new(sdk_config),
            table,
        }
    }
}

#[async_trait]
impl RecordStore for DynamoRecordStore {
    async fn put_record(&self, record: &ParticipationRecord) -> Result<(), ServiceError> {
        self.client
            .put_item()
            .table_name(&self.table)
            .item("email", AttributeValue::S(record.email.clone()))
            .item("name", AttributeValue::S(record.name.clone()))
            .item(
                SESSION_DATE_ATTRIBUTE,
                AttributeValue::S(record.session_date.clone()),
            )
            .item("participation", AttributeValue::Bool(record.participation))
            .send()
            .await
            .map_err(|e| ServiceError::new("dynamodb", DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }
}
