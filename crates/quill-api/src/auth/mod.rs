//! Admin authentication: shared-secret login issuing a signed session cookie.
//!
//! Credential verification lives behind [`AdminAuth`] so that rotation or
//! multiple admins can be added later without touching post or statistics
//! logic.

pub mod middleware;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use quill_core::{AppError, Config};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

/// Name of the session cookie.
pub const COOKIE_NAME: &str = "Admin-Token";

/// Session token claims.
#[derive(Debug, Serialize, Deserialize)]
struct AdminClaims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Shared-secret credential verification and session token handling.
#[derive(Clone)]
pub struct AdminAuth {
    admin_secret: String,
    jwt_secret: String,
    cookie_domain: Option<String>,
    expiry_days: i64,
}

impl AdminAuth {
    pub fn new(config: &Config) -> Self {
        Self {
            admin_secret: config.admin_secret_key.clone(),
            jwt_secret: config.jwt_secret.clone(),
            cookie_domain: config.cookie_domain.clone(),
            expiry_days: config.session_expiry_days,
        }
    }

    /// Verify the shared secret and issue a signed session token.
    pub fn login(&self, secret_key: &str) -> Result<String, AppError> {
        // Constant-time comparison; unequal lengths compare as not-equal.
        let matched: bool = secret_key
            .as_bytes()
            .ct_eq(self.admin_secret.as_bytes())
            .into();
        if !matched {
            return Err(AppError::Unauthorized("Invalid Admin key".to_string()));
        }

        let now = Utc::now();
        let claims = AdminClaims {
            sub: "admin".to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(self.expiry_days)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Failed to sign session token: {}", e)))
    }

    /// Verify a session token from the cookie.
    pub fn verify(&self, token: &str) -> Result<(), AppError> {
        decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|_| ())
        .map_err(|_| AppError::Unauthorized("Invalid or expired admin token".to_string()))
    }

    /// Build the Set-Cookie value for a fresh session.
    ///
    /// HttpOnly + Secure + SameSite=None so the cookie survives cross-site
    /// requests from the frontend; scoped to the configured parent domain.
    pub fn session_cookie(&self, token: &str) -> String {
        self.build_cookie(token, self.expiry_days * 24 * 60 * 60)
    }

    /// Build the Set-Cookie value that clears the session.
    pub fn clear_cookie(&self) -> String {
        self.build_cookie("", 0)
    }

    fn build_cookie(&self, value: &str, max_age_secs: i64) -> String {
        let mut parts = vec![
            format!("{}={}", COOKIE_NAME, value),
            "Path=/".to_string(),
            format!("Max-Age={}", max_age_secs),
        ];
        if let Some(ref domain) = self.cookie_domain {
            parts.push(format!("Domain={}", domain));
        }
        parts.push("HttpOnly".to_string());
        parts.push("Secure".to_string());
        parts.push("SameSite=None".to_string());
        parts.join("; ")
    }
}
