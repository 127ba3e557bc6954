use async_trait::async_trait;
use aws_sdk_rekognition::Client;
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::types::{Image, S3Object};

use super::{FaceComparer, FaceMatch, ServiceError};
use crate::models::PhotoReference;

pub struct RekognitionComparer {
    client: Client,
}

impl RekognitionComparer {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

fn s3_image(location: &PhotoReference) -> Image {
    Image::builder()
        .s3_object(
            S3Object::builder()
                .bucket(&location.bucket)
                .name(&location.key)
                .build(),
        )
        .build()
}

#[async_trait]
impl FaceComparer for RekognitionComparer {
    async fn compare_faces(
        &self,
        source: &PhotoReference,
        target: &PhotoReference,
        threshold: f32,
    ) -> Result<Vec<FaceMatch>, ServiceError> {
        let resp = self
            .client
            .compare_faces()
            .source_image(s3_image(source))
            .target_image(s3_image(target))
            .similarity_threshold(threshold)
            .send()
            .await
            .map_err(|e| ServiceError::new("rekognition", DisplayErrorContext(&e).to_string()))?;

        Ok(resp
            .face_matches()
            .iter()
            .map(|m| FaceMatch {
                similarity: m.similarity().unwrap_or_default(),
            })
            .collect())
    }
}
