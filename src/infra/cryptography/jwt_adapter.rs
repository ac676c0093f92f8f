//! JWT access-token adapter.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::Encrypter;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// HS256 token issuer keyed by the configured secret.
pub struct JwtAdapter {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl JwtAdapter {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret_bytes()),
            expiration_hours: config.jwt_expiration_hours,
        }
    }

    /// Verify a token and extract its claims.
    pub fn decrypt(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }
}

impl Encrypter for JwtAdapter {
    fn encrypt(&self, subject: &str) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.expiration_hours);

        let claims = Claims {
            sub: subject.to_owned(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }
}
