//! Configuration module
//!
//! Process-wide configuration loaded once at startup and passed explicitly
//! into the components that need it. Nothing reads the environment after
//! `Config::from_env` returns.

use std::env;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 10;
const DEFAULT_MAX_PHOTOS_PER_POST: usize = 5;
const DEFAULT_MAX_BODY_SIZE_BYTES: usize = 50 * 1024 * 1024;

/// Supported object storage backends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    S3,
    Local,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "s3" => Ok(StorageBackend::S3),
            "local" => Ok(StorageBackend::Local),
            other => bail!("Unknown storage backend: {}", other),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// Allowed CORS origin (the frontend), credentials enabled
    pub frontend_url: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    /// Shared admin secret checked on login
    pub admin_secret_key: String,
    /// HS256 signing key for session tokens
    pub jwt_secret: String,
    /// Parent domain the session cookie is scoped to (e.g. ".example.com")
    pub cookie_domain: Option<String>,
    pub session_expiry_days: i64,
    pub environment: String,
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    /// Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    pub s3_endpoint: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    pub max_photos_per_post: usize,
    pub max_body_size_bytes: usize,
}

impl Config {
    /// Load configuration from the environment (a `.env` file is honored).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::S3,
        };

        Ok(Config {
            server_port: parse_or_default("PORT", DEFAULT_SERVER_PORT)?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            db_max_connections: parse_or_default(
                "DB_MAX_CONNECTIONS",
                DEFAULT_DB_MAX_CONNECTIONS,
            )?,
            db_timeout_seconds: parse_or_default("DB_TIMEOUT_SECONDS", DEFAULT_DB_TIMEOUT_SECS)?,
            admin_secret_key: env::var("ADMIN_SECRET_KEY")
                .context("ADMIN_SECRET_KEY must be set")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            cookie_domain: env::var("COOKIE_DOMAIN").ok().filter(|s| !s.is_empty()),
            session_expiry_days: parse_or_default(
                "SESSION_EXPIRY_DAYS",
                DEFAULT_SESSION_EXPIRY_DAYS,
            )?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            storage_backend,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok().or(env::var("AWS_REGION").ok()),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            max_photos_per_post: parse_or_default(
                "MAX_PHOTOS_PER_POST",
                DEFAULT_MAX_PHOTOS_PER_POST,
            )?,
            max_body_size_bytes: parse_or_default(
                "MAX_BODY_SIZE_BYTES",
                DEFAULT_MAX_BODY_SIZE_BYTES,
            )?,
        })
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.to_lowercase().as_str(), "production" | "prod")
    }
}

/// Parse an env var, falling back to a default when absent. Malformed values
/// are an error rather than silently replaced.
fn parse_or_default<T: FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
