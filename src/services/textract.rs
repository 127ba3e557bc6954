use async_trait::async_trait;
use aws_sdk_textract::Client;
use aws_sdk_textract::error::DisplayErrorContext;
use aws_sdk_textract::types::{Document, S3Object};

use super::{ServiceError, TextDetector};
use crate::models::PhotoReference;

pub struct TextractDetector {
    client: Client,
}

impl TextractDetector {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl TextDetector for TextractDetector {
    async fn detect_text(&self, image: &PhotoReference) -> Result<Vec<String>, ServiceError> {
        let document = Document::builder()
            .s3_object(
                S3Object::builder()
                    .bucket(&image.bucket)
                    .name(&image.key)
                    .build(),
            )
            .build();

        let resp = self
            .client
            .detect_document_text()
            .document(document)
            .send()
            .await
            .map_err(|e| ServiceError::new("textract", DisplayErrorContext(&e).to_string()))?;

        // Both LINE and WORD blocks carry text; keep them all.
        Ok(resp
            .blocks()
            .iter()
            .filter_map(|block| block.text().map(|t| t.to_string()))
            .collect())
    }
}
