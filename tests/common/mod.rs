use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use rollcall::config::Config;
use rollcall::models::{ParticipationRecord, PhotoReference};
use rollcall::services::{
    FaceComparer, FaceMatch, ObjectStore, RecordStore, ServiceError, Services, TextDetector,
};

pub const BUCKET: &str = "test-bucket";
pub const ROSTER_KEY: &str = "roster/names1.jpg";
pub const REFERENCE_KEYS: [&str; 3] = ["refs/faces1.jpg", "refs/faces2.jpg", "refs/faces3.jpg"];

pub fn test_config() -> Config {
    Config {
        bucket: BUCKET.to_string(),
        roster_image_key: ROSTER_KEY.to_string(),
        reference_image_keys: REFERENCE_KEYS.iter().map(|k| k.to_string()).collect(),
        similarity_threshold: 80.0,
        upload_prefix: "uploads".to_string(),
        record_table: "participation-records".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 6_291_456,
        log_level: "warn".to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct Upload {
    pub location: PhotoReference,
    pub body: Vec<u8>,
    pub content_type: String,
}

/// What a face comparison against one reference image returns.
#[derive(Debug, Clone)]
pub enum FaceOutcome {
    Matches(Vec<f32>),
    Fail(String),
}

/// In-memory stand-in for every external service. Scripted responses are
/// set before spawning; calls are recorded for assertions.
pub struct MockServices {
    pub fail_upload: bool,
    pub text: Result<Vec<String>, String>,
    pub faces: HashMap<String, FaceOutcome>,
    pub fail_record: bool,

    pub uploads: Mutex<Vec<Upload>>,
    pub text_calls: Mutex<Vec<PhotoReference>>,
    pub comparisons: Mutex<Vec<(PhotoReference, PhotoReference, f32)>>,
    pub records: Mutex<Vec<ParticipationRecord>>,
}

impl Default for MockServices {
    fn default() -> Self {
        Self {
            fail_upload: false,
            text: Ok(Vec::new()),
            faces: HashMap::new(),
            fail_record: false,
            uploads: Mutex::new(Vec::new()),
            text_calls: Mutex::new(Vec::new()),
            comparisons: Mutex::new(Vec::new()),
            records: Mutex::new(Vec::new()),
        }
    }
}

impl MockServices {
    pub fn with_text(mut self, fragments: &[&str]) -> Self {
        self.text = Ok(fragments.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_face(mut self, reference_key: &str, outcome: FaceOutcome) -> Self {
        self.faces.insert(reference_key.to_string(), outcome);
        self
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn comparisons(&self) -> Vec<(PhotoReference, PhotoReference, f32)> {
        self.comparisons.lock().unwrap().clone()
    }

    pub fn records(&self) -> Vec<ParticipationRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn text_call_count(&self) -> usize {
        self.text_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for MockServices {
    async fn put_object(
        &self,
        location: &PhotoReference,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ServiceError> {
        if self.fail_upload {
            return Err(ServiceError::new("s3", "AccessDenied"));
        }
        self.uploads.lock().unwrap().push(Upload {
            location: location.clone(),
            body,
            content_type: content_type.to_string(),
        });
        Ok(())
    }
}

#[async_trait]
impl TextDetector for MockServices {
    async fn detect_text(&self, image: &PhotoReference) -> Result<Vec<String>, ServiceError> {
        self.text_calls.lock().unwrap().push(image.clone());
        self.text
            .clone()
            .map_err(|e| ServiceError::new("textract", e))
    }
}

#[async_trait]
impl FaceComparer for MockServices {
    async fn compare_faces(
        &self,
        source: &PhotoReference,
        target: &PhotoReference,
        threshold: f32,
    ) -> Result<Vec<FaceMatch>, ServiceError> {
        self.comparisons
            .lock()
            .unwrap()
            .push((source.clone(), target.clone(), threshold));
        match self.faces.get(&target.key) {
            Some(FaceOutcome::Matches(scores)) => Ok(scores
                .iter()
                .map(|&similarity| FaceMatch { similarity })
                .collect()),
            Some(FaceOutcome::Fail(msg)) => Err(ServiceError::new("rekognition", msg.clone())),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl RecordStore for MockServices {
    async fn put_record(&self, record: &ParticipationRecord) -> Result<(), ServiceError> {
        if self.fail_record {
            return Err(ServiceError::new("dynamodb", "ResourceNotFoundException"));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// A running test server backed by mock services.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub mocks: Arc<MockServices>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body to the evaluation route, return (body, status).
    pub async fn evaluate(&self, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/upload"))
            .json(body)
            .send()
            .await
            .expect("evaluate request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a raw body to the evaluation route, return (body, status).
    pub async fn evaluate_raw(&self, body: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/upload"))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("evaluate request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Spawn the app with default config and the given mocks.
pub async fn spawn_app(mocks: MockServices) -> TestApp {
    spawn_app_with_config(test_config(), mocks).await
}

/// Wire one mock into every service slot.
pub fn services(mocks: &Arc<MockServices>) -> Services {
    Services {
        objects: mocks.clone(),
        text: mocks.clone(),
        faces: mocks.clone(),
        records: mocks.clone(),
    }
}

pub async fn spawn_app_with_config(config: Config, mocks: MockServices) -> TestApp {
    let mocks = Arc::new(mocks);
    let app = rollcall::build_app(config, services(&mocks));

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        mocks,
    }
}
