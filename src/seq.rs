//! Fetch Generations
//!
//! Requests are never aborted, so a slow response can arrive after the view
//! has already issued a newer fetch. Each fetch takes a token from this
//! counter and applies its result only if the token is still current.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct FetchSeq(Arc<AtomicU64>);

impl FetchSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating all earlier tokens
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.load(Ordering::Relaxed) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_generation_invalidates_older() {
        let seq = FetchSeq::new();
        let first = seq.begin();
        assert!(seq.is_current(first));
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let seq = FetchSeq::new();
        let token = seq.begin();
        let clone = seq.clone();
        assert!(clone.is_current(token));
        clone.begin();
        assert!(!seq.is_current(token));
    }
}
