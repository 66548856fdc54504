//! Stateless token signing and verification

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tg_shared::config::auth::MAX_TOKEN_EXPIRY_SECONDS;
use tracing::error;
use uuid::Uuid;

use crate::domain::entities::token::{Payload, CLAIM_EXP, CLAIM_IAT, CLAIM_JTI};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::clock::Clock;
use super::config::TokenServiceConfig;

/// Signs payloads and verifies tokens with a process-wide symmetric secret.
///
/// Verification checks structure, algorithm and signature only. Expiry is
/// left to the caller so that "expired" and "invalid" stay distinguishable.
pub struct TokenCodec {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_expiry: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Creates a codec for the configured secret and algorithm
    ///
    /// # Errors
    ///
    /// * `DomainError::Config` - empty secret, or validity window outside
    ///   `1..=MAX_TOKEN_EXPIRY_SECONDS`
    /// * `TokenError::UnsupportedAlgorithm` - algorithm is not HMAC based
    pub fn new(config: &TokenServiceConfig, clock: Arc<dyn Clock>) -> DomainResult<Self> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::Config {
                message: "JWT secret must not be empty".to_string(),
            });
        }
        if !(1..=MAX_TOKEN_EXPIRY_SECONDS).contains(&config.token_expiry_seconds) {
            return Err(DomainError::Config {
                message: format!(
                    "token expiry must be within 1..={} seconds, got {}",
                    MAX_TOKEN_EXPIRY_SECONDS, config.token_expiry_seconds
                ),
            });
        }
        if !matches!(
            config.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(TokenError::UnsupportedAlgorithm {
                algorithm: format!("{:?}", config.algorithm),
            }
            .into());
        }

        let secret = config.jwt_secret.as_bytes();

        let mut validation = Validation::new(config.algorithm);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;

        Ok(Self {
            algorithm: config.algorithm,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            token_expiry: config.token_expiry(),
            clock,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn token_expiry(&self) -> Duration {
        self.token_expiry
    }

    /// Signs a copy of `payload` with fresh `exp`, `iat` and `jti` claims
    pub fn encode(&self, payload: &Payload) -> Result<String, TokenError> {
        self.sign(payload).map(|(token, _)| token)
    }

    /// Signs a copy of `payload` and returns the token with the claims it carries
    pub fn sign(&self, payload: &Payload) -> Result<(String, Payload), TokenError> {
        let now = self.clock.now();
        let expires_at = now.checked_add_signed(self.token_expiry).ok_or_else(|| {
            error!(now = %now, "Token expiry overflows the representable time range");
            TokenError::TokenGenerationFailed
        })?;

        let mut claims = payload.clone();
        claims.insert(CLAIM_EXP, expires_at.timestamp());
        claims.insert(CLAIM_IAT, now.timestamp());
        claims.insert(CLAIM_JTI, Uuid::new_v4().to_string());

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "Failed to sign token");
            TokenError::TokenGenerationFailed
        })?;

        Ok((token, claims))
    }

    /// Verifies the signature of `token` and returns its payload
    ///
    /// # Errors
    ///
    /// * `TokenError::BlankToken` - empty or whitespace-only input
    /// * `TokenError::MalformedToken` - wrong segment count or bad encoding
    /// * `TokenError::AlgorithmMismatch` - header names another algorithm
    /// * `TokenError::InvalidSignature` - signature does not match
    pub fn verify_and_decode(&self, token: &str) -> Result<Payload, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::BlankToken);
        }

        let data = decode::<Payload>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}
