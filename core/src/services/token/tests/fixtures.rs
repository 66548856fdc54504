//! Shared helpers for token tests

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::token::{Payload, CLAIM_EXP};
use crate::services::token::{ManualClock, TokenCacheService, TokenCodec, TokenServiceConfig};

pub const TEST_SECRET: &str = "test-secret-for-token-cache";

/// Fixed starting instant so expiry arithmetic is reproducible
pub fn epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

pub fn test_config() -> TokenServiceConfig {
    TokenServiceConfig::new(TEST_SECRET)
}

pub fn create_test_service() -> (TokenCacheService, ManualClock) {
    create_service_with(test_config())
}

pub fn create_uncached_service(clock: &ManualClock) -> TokenCacheService {
    TokenCacheService::with_clock(test_config().without_cache(), Arc::new(clock.clone()))
        .expect("Failed to create token service")
}

pub fn create_service_with(config: TokenServiceConfig) -> (TokenCacheService, ManualClock) {
    let clock = ManualClock::new(epoch());
    let service = TokenCacheService::with_clock(config, Arc::new(clock.clone()))
        .expect("Failed to create token service");
    (service, clock)
}

pub fn create_test_codec(clock: &ManualClock) -> TokenCodec {
    TokenCodec::new(&test_config(), Arc::new(clock.clone())).expect("Failed to create codec")
}

/// Signs `payload` as-is with an explicit `exp`, bypassing the codec
pub fn sign_with_exp(payload: &Payload, exp: i64) -> String {
    sign_claims(&payload.clone().with_claim(CLAIM_EXP, exp))
}

/// Signs `claims` exactly as given with the test secret
pub fn sign_claims(claims: &Payload) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to sign test token")
}

/// Returns `token` with the signature character at `index` replaced
pub fn tamper_signature(token: &str, index: usize) -> String {
    let split = token.rfind('.').expect("token has a signature segment") + 1;
    let (head, signature) = token.split_at(split);
    let mut chars: Vec<char> = signature.chars().collect();
    chars[index] = if chars[index] == 'A' { 'B' } else { 'A' };
    format!("{}{}", head, chars.into_iter().collect::<String>())
}

pub fn signature_len(token: &str) -> usize {
    token.rsplit('.').next().map(str::len).unwrap_or(0)
}
