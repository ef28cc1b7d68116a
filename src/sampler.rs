//! Uniform sampling without replacement.
//!
//! The whole collection is shuffled with Fisher-Yates and the first `count`
//! elements are kept, so every record is equally likely to land in any
//! output position and none can appear twice.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Errors that can occur while sampling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    #[error("Requested {requested} records but only {available} are available")]
    InsufficientRecords { requested: usize, available: usize },
}

/// Draws random selections from record collections.
///
/// The randomness source is injected so tests can use a fixed seed.
#[derive(Debug, Clone)]
pub struct Sampler<R = StdRng> {
    rng: R,
}

impl Sampler<StdRng> {
    /// Seed from the wall clock. Not reproducible across runs.
    pub fn from_clock() -> Self {
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        Self::seeded(nanos as u64)
    }

    /// Deterministic sampler for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Sampler<R> {
    /// Create with a specific randomness source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Select `count` distinct records, uniformly at random.
    ///
    /// Asking for more records than the collection holds is an error;
    /// the selection is never silently shortened.
    pub fn sample<T>(&mut self, mut records: Vec<T>, count: usize) -> Result<Vec<T>, SampleError> {
        if count > records.len() {
            return Err(SampleError::InsufficientRecords {
                requested: count,
                available: records.len(),
            });
        }

        records.shuffle(&mut self.rng);
        records.truncate(count);
        Ok(records)
    }
}
