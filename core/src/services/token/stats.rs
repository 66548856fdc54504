//! Token cache counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of the token cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Decode requests, including those answered from the cache
    pub decode_calls: u64,
    /// Decodes answered from the cache
    pub hits: u64,
    /// Decodes that had to verify the signature
    pub misses: u64,
    /// Entries stored
    pub inserts: u64,
    /// Full sweeps run (lazy, reactive, manual or background)
    pub sweeps: u64,
    /// Entries removed because they expired
    pub evicted: u64,
}

impl CacheStats {
    /// Fraction of decodes served from the cache
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct CacheCounters {
    decode_calls: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
    sweeps: AtomicU64,
    evicted: AtomicU64,
}

impl CacheCounters {
    pub(crate) fn record_decode(&self) {
        self.decode_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_sweep(&self, evicted: usize) {
        self.sweeps.fetch_add(1, Ordering::Relaxed);
        self.record_evicted(evicted);
    }

    pub(crate) fn record_evicted(&self, evicted: usize) {
        self.evicted.fetch_add(evicted as u64, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> CacheStats {
        CacheStats {
            decode_calls: self.decode_calls.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            sweeps: self.sweeps.load(Ordering::Relaxed),
            evicted: self.evicted.load(Ordering::Relaxed),
        }
    }
}
