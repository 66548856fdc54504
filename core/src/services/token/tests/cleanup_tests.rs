//! Tests for the background token cache sweeper

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;
use tg_shared::TokenCacheConfig;

use super::fixtures::{create_test_service, epoch, sign_with_exp};
use crate::domain::entities::token::Payload;
use crate::services::token::{SweepResult, TokenCacheSweeper, TokenCacheSweeperConfig};

fn sweeper_config(interval_ms: u64) -> TokenCacheSweeperConfig {
    TokenCacheSweeperConfig {
        interval: StdDuration::from_millis(interval_ms),
        enabled: true,
    }
}

#[test]
fn test_run_once_removes_expired_entries() {
    let (service, clock) = create_test_service();
    let service = Arc::new(service);
    for user_id in 0..3 {
        service.decode(&sign_with_exp(&Payload::for_user(user_id, 1), epoch().timestamp() + 1));
    }
    service.encode(&Payload::for_user(10, 1)).unwrap();

    let sweeper = TokenCacheSweeper::new(service.clone(), sweeper_config(1000));
    assert_eq!(sweeper.run_once(), SweepResult { removed: 0, remaining: 4 });

    clock.advance(Duration::seconds(5));
    assert_eq!(sweeper.run_once(), SweepResult { removed: 3, remaining: 1 });
    assert_eq!(service.stats().sweeps, 2);
}

#[test]
fn test_config_from_cache_config() {
    let config = TokenCacheSweeperConfig::from(&TokenCacheConfig::default());
    assert!(!config.enabled);

    let config = TokenCacheSweeperConfig::from(&TokenCacheConfig::default().with_background_sweep(30));
    assert!(config.enabled);
    assert_eq!(config.interval, StdDuration::from_secs(30));

    let mut cache = TokenCacheConfig::disabled().with_background_sweep(30);
    assert!(!TokenCacheSweeperConfig::from(&cache).enabled);
    cache.enabled = true;
    cache.background_interval_seconds = 0;
    assert_eq!(TokenCacheSweeperConfig::from(&cache).interval, StdDuration::from_secs(1));
}

#[tokio::test]
async fn test_disabled_sweeper_does_not_start() {
    let (service, _clock) = create_test_service();
    let sweeper = Arc::new(TokenCacheSweeper::new(
        Arc::new(service),
        TokenCacheSweeperConfig::default(),
    ));

    assert!(sweeper.start_background_task().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_background_task_sweeps_periodically() {
    let (service, clock) = create_test_service();
    let service = Arc::new(service);
    let token = sign_with_exp(&Payload::for_user(1, 1), epoch().timestamp() + 1);
    service.decode(&token);
    assert_eq!(service.len(), 1);

    let sweeper = Arc::new(TokenCacheSweeper::new(service.clone(), sweeper_config(50)));
    let handle = sweeper.start_background_task().expect("sweeper should start");

    tokio::time::sleep(StdDuration::from_millis(10)).await;
    assert_eq!(service.len(), 1);

    clock.advance(Duration::seconds(2));
    tokio::time::sleep(StdDuration::from_millis(120)).await;

    assert!(service.is_empty());
    assert!(service.stats().sweeps >= 2);

    handle.abort();
}
