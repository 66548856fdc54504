//! Token cache service implementation

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, TimeZone, Utc};
use tg_shared::AppConfig;
use tracing::{debug, info, warn};

use crate::domain::entities::token::Payload;
use crate::domain::value_objects::{IssuedToken, TokenStatus};
use crate::errors::{DomainResult, TokenError};

use super::clock::{Clock, SystemClock};
use super::codec::TokenCodec;
use super::config::TokenServiceConfig;
use super::stats::{CacheCounters, CacheStats};

/// Decoded payload together with the instant it stops being served
#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Payload,
    expires_at: DateTime<Utc>,
}

#[derive(Debug)]
struct CacheState {
    entries: HashMap<String, CacheEntry>,
    last_sweep: DateTime<Utc>,
}

/// Issues and validates tokens, caching decoded payloads by token string.
///
/// The cache only accelerates: every answer it gives is the one signature
/// verification would give. All map access goes through one mutex that is
/// never held while signing or verifying.
///
/// Expired entries leave the cache three ways:
/// - a lookup that finds one removes it on the spot
/// - an insertion sweeps if the last sweep is older than the sweep interval
/// - a failed decode always sweeps
pub struct TokenCacheService {
    codec: TokenCodec,
    clock: Arc<dyn Clock>,
    cache_enabled: bool,
    sweep_interval: Duration,
    state: Mutex<CacheState>,
    counters: CacheCounters,
}

impl TokenCacheService {
    /// Creates a new token cache service on the wall clock
    pub fn new(config: TokenServiceConfig) -> DomainResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new token cache service reading time from `clock`
    pub fn with_clock(config: TokenServiceConfig, clock: Arc<dyn Clock>) -> DomainResult<Self> {
        let codec = TokenCodec::new(&config, clock.clone())?;
        let now = clock.now();

        info!(
            algorithm = ?codec.algorithm(),
            expiry_seconds = config.token_expiry_seconds,
            cache_enabled = config.cache_enabled,
            sweep_interval_seconds = config.sweep_interval_seconds,
            "Token cache service initialized"
        );

        Ok(Self {
            codec,
            clock,
            cache_enabled: config.cache_enabled,
            sweep_interval: config.sweep_interval(),
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                last_sweep: now,
            }),
            counters: CacheCounters::default(),
        })
    }

    /// Validates the application configuration and builds the service from it
    pub fn from_app_config(config: &AppConfig) -> DomainResult<Self> {
        config.validate()?;
        let service_config = TokenServiceConfig::from_shared(&config.jwt, &config.cache)?;
        Self::new(service_config)
    }

    pub fn is_cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    /// Signs `payload` and caches the new token.
    ///
    /// The caller's payload is not modified; reserved claims are added to a copy.
    pub fn encode(&self, payload: &Payload) -> Result<String, TokenError> {
        self.issue(payload).map(|(token, _)| token)
    }

    /// Mints the login token for a user of a tenant
    pub fn issue_for_user(&self, user_id: i64, tenant_id: i64) -> Result<IssuedToken, TokenError> {
        let (token, claims) = self.issue(&Payload::for_user(user_id, tenant_id))?;

        let issued_at = claims
            .iat()
            .and_then(|iat| Utc.timestamp_opt(iat, 0).single())
            .ok_or(TokenError::TokenGenerationFailed)?;
        let expires_at = claims.expires_at().ok_or(TokenError::TokenGenerationFailed)?;
        let token_id = claims
            .jti()
            .ok_or(TokenError::TokenGenerationFailed)?
            .to_string();

        debug!(user_id, tenant_id, token_id = %token_id, "Issued user token");
        Ok(IssuedToken::new(token, token_id, issued_at, expires_at))
    }

    fn issue(&self, payload: &Payload) -> Result<(String, Payload), TokenError> {
        let (token, claims) = self.codec.sign(payload)?;
        if let Some(expires_at) = claims.expires_at() {
            self.store(&token, claims.clone(), expires_at);
        }
        Ok((token, claims))
    }

    /// Decodes `token`, returning `None` for anything that fails verification.
    ///
    /// Expired but correctly signed tokens still decode; use
    /// [`valid_token`](Self::valid_token) to also check expiry.
    pub fn decode(&self, token: &str) -> Option<Payload> {
        self.try_decode(token).ok()
    }

    /// Like [`decode`](Self::decode) but reports why a token was rejected
    pub fn try_decode(&self, token: &str) -> Result<Payload, TokenError> {
        self.counters.record_decode();

        if let Some(payload) = self.lookup(token) {
            self.counters.record_hit();
            debug!("Token cache hit");
            return Ok(payload);
        }

        self.counters.record_miss();
        match self.codec.verify_and_decode(token) {
            Ok(payload) => {
                if let Some(expires_at) = payload.expires_at() {
                    if expires_at > self.clock.now() {
                        self.store(token, payload.clone(), expires_at);
                    }
                }
                Ok(payload)
            }
            Err(e) => {
                warn!(reason = e.kind(), "Token decode failed");
                self.sweep();
                Err(e)
            }
        }
    }

    /// Decodes once and classifies the token.
    ///
    /// Blank input (`None`, empty or whitespace) is rejected without decoding.
    pub fn status<'a>(&self, token: impl Into<Option<&'a str>>) -> TokenStatus {
        let token = match token.into() {
            Some(token) if !token.trim().is_empty() => token,
            _ => return TokenStatus::Invalid(TokenError::BlankToken),
        };

        match self.try_decode(token) {
            Ok(payload) if payload.is_expired_at(self.clock.now()) => TokenStatus::Expired(payload),
            Ok(payload) => TokenStatus::Valid(payload),
            Err(e) => TokenStatus::Invalid(e),
        }
    }

    /// True if the token decodes and its `exp` is strictly in the future
    pub fn valid_token<'a>(&self, token: impl Into<Option<&'a str>>) -> bool {
        self.status(token).is_valid()
    }

    /// True if the token fails to decode or its `exp` has passed
    pub fn expired<'a>(&self, token: impl Into<Option<&'a str>>) -> bool {
        self.status(token).is_expired()
    }

    /// Removes every expired entry, returning how many were removed
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        let mut state = self.state();
        self.sweep_locked(&mut state, now)
    }

    /// Drops every entry. A secret change must be followed by this.
    pub fn clear(&self) -> usize {
        let mut state = self.state();
        let removed = state.entries.len();
        state.entries.clear();
        drop(state);

        info!(removed, "Token cache cleared");
        removed
    }

    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot()
    }

    fn state(&self) -> MutexGuard<'_, CacheState> {
        // Entries are written whole under the lock, so a poisoned map is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lookup(&self, token: &str) -> Option<Payload> {
        if !self.cache_enabled {
            return None;
        }

        let now = self.clock.now();
        let mut state = self.state();
        let expired = match state.entries.get(token) {
            Some(entry) if entry.expires_at > now => return Some(entry.payload.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            state.entries.remove(token);
            drop(state);
            self.counters.record_evicted(1);
            debug!("Removed expired token from cache on lookup");
        }
        None
    }

    fn store(&self, token: &str, payload: Payload, expires_at: DateTime<Utc>) {
        if !self.cache_enabled {
            return;
        }

        let now = self.clock.now();
        let mut state = self.state();
        if now - state.last_sweep > self.sweep_interval {
            self.sweep_locked(&mut state, now);
        }
        state
            .entries
            .insert(token.to_owned(), CacheEntry { payload, expires_at });
        drop(state);

        self.counters.record_insert();
    }

    fn sweep_locked(&self, state: &mut CacheState, now: DateTime<Utc>) -> usize {
        let before = state.entries.len();
        state.entries.retain(|_, entry| entry.expires_at > now);
        state.last_sweep = now;

        let removed = before - state.entries.len();
        self.counters.record_sweep(removed);
        debug!(removed, remaining = state.entries.len(), "Swept token cache");
        removed
    }
}
