use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub bucket: String,
    pub roster_image_key: String,
    pub reference_image_keys: Vec<String>,
    pub similarity_threshold: f32,
    pub upload_prefix: String,
    pub record_table: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| format!("Missing required environment variable: {key}"))
        };
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bucket = required("ROLLCALL_BUCKET")?;
        let roster_image_key = required("ROLLCALL_ROSTER_IMAGE_KEY")?;

        let reference_image_keys: Vec<String> = required("ROLLCALL_REFERENCE_IMAGE_KEYS")?
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();
        if reference_image_keys.is_empty() {
            return Err("ROLLCALL_REFERENCE_IMAGE_KEYS must name at least one image".to_string());
        }

        let similarity_threshold: f32 = or("ROLLCALL_SIMILARITY_THRESHOLD", "80")
            .parse()
            .map_err(|e| format!("Invalid ROLLCALL_SIMILARITY_THRESHOLD: {e}"))?;
        if !(0.0..=100.0).contains(&similarity_threshold) {
            return Err(format!(
                "Invalid ROLLCALL_SIMILARITY_THRESHOLD: {similarity_threshold} is outside 0-100"
            ));
        }

        let upload_prefix = or("ROLLCALL_UPLOAD_PREFIX", "uploads")
            .trim_matches('/')
            .to_string();

        let record_table = or("ROLLCALL_RECORD_TABLE", "participation-records");

        let host: IpAddr = or("ROLLCALL_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid ROLLCALL_HOST: {e}"))?;

        let port: u16 = or("ROLLCALL_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid ROLLCALL_PORT: {e}"))?;

        let max_body_size: usize = or("ROLLCALL_MAX_BODY_SIZE", "6291456")
            .parse()
            .map_err(|e| format!("Invalid ROLLCALL_MAX_BODY_SIZE: {e}"))?;

        let log_level = or("ROLLCALL_LOG_LEVEL", "info");

        Ok(Config {
            bucket,
            roster_image_key,
            reference_image_keys,
            similarity_threshold,
            upload_prefix,
            record_table,
            host,
            port,
            max_body_size,
            log_level,
        })
    }
}
