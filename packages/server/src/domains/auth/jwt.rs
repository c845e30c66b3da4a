use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::common::UserId;

/// JWT Claims - the subset of the platform's access token we rely on
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Subject (user id)
    pub aud: String, // Audience ("authenticated" for signed-in users)
    #[serde(default)]
    pub role: Option<String>,
    pub exp: i64, // Expiration timestamp
    pub iat: i64, // Issued at timestamp
}

impl Claims {
    pub fn user_id(&self) -> UserId {
        UserId::new(self.sub.clone())
    }
}

/// JWT Service - verifies access tokens issued by the platform's auth service
///
/// Tokens are HS256-signed with the project's JWT secret.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    audience: String,
}

impl JwtService {
    pub fn new(secret: &str, audience: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            audience,
        }
    }

    /// Sign a token for a user (local development and tests)
    ///
    /// Token expires after 1 hour, matching the platform's default.
    pub fn create_token(&self, user_id: &UserId) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::hours(1);

        let claims = Claims {
            sub: user_id.to_string(),
            aud: self.audience.clone(),
            role: Some("authenticated".to_string()),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a JWT token
    ///
    /// Returns claims if the signature, audience and expiry all check out
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_audience(&[&self.audience]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}
