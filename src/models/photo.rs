use std::fmt;

/// A storage location holding an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoReference {
    pub bucket: String,
    pub key: String,
}

impl PhotoReference {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for PhotoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}
