pub mod dynamodb;
pub mod rekognition;
pub mod s3;
pub mod textract;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::models::{ParticipationRecord, PhotoReference};

/// Failure of a single call to an external service. Callers decide whether
/// it degrades the evaluation or aborts it.
#[derive(Debug, Clone)]
pub struct ServiceError {
    pub service: &'static str,
    pub message: String,
}

impl ServiceError {
    pub fn new(service: &'static str, message: impl Into<String>) -> Self {
        Self {
            service,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.service, self.message)
    }
}

impl std::error::Error for ServiceError {}

/// A single face match reported by a comparison, similarity in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMatch {
    pub similarity: f32,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(
        &self,
        location: &PhotoReference,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ServiceError>;
}

#[async_trait]
pub trait TextDetector: Send + Sync {
    /// Every text fragment recognized in the image, in reading order.
    async fn detect_text(&self, image: &PhotoReference) -> Result<Vec<String>, ServiceError>;
}

#[async_trait]
pub trait FaceComparer: Send + Sync {
    /// Faces in `target` that match the face in `source` at or above
    /// `threshold`. An empty list means no match, not a failure.
    async fn compare_faces(
        &self,
        source: &PhotoReference,
        target: &PhotoReference,
        threshold: f32,
    ) -> Result<Vec<FaceMatch>, ServiceError>;
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn put_record(&self, record: &ParticipationRecord) -> Result<(), ServiceError>;
}

/// The external collaborators a request handler talks to.
#[derive(Clone)]
pub struct Services {
    pub objects: Arc<dyn ObjectStore>,
    pub text: Arc<dyn TextDetector>,
    pub faces: Arc<dyn FaceComparer>,
    pub records: Arc<dyn RecordStore>,
}

impl Services {
    /// AWS-backed services sharing one SDK configuration.
    pub fn aws(sdk_config: &aws_config::SdkConfig, config: &Config) -> Self {
        Self {
            objects: Arc::new(s3::S3ObjectStore::new(sdk_config)),
            text: Arc::new(textract::TextractDetector::new(sdk_config)),
            faces: Arc::new(rekognition::RekognitionComparer::new(sdk_config)),
            records: Arc::new(dynamodb::DynamoRecordStore::new(
                sdk_config,
                config.record_table.clone(),
            )),
        }
    }
}
