//! Weighted bucket selection.
//!
//! Buckets declare an integer share of the total weight. A draw is uniform
//! over `[0, total)` and lands in the bucket whose cumulative span covers it,
//! so the buckets are mutually exclusive and cover the whole probability space.

use crate::error::CatalogError;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<T> {
    pub share: u32,
    pub value: T,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedBuckets<T> {
    buckets: Vec<Bucket<T>>,
    total: u32,
}

impl<T> WeightedBuckets<T> {
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyBuckets`] when no bucket carries a
    /// positive share.
    pub fn new(buckets: Vec<Bucket<T>>) -> Result<Self, CatalogError> {
        let total = buckets
            .iter()
            .fold(0_u32, |acc, bucket| acc.saturating_add(bucket.share));
        if total == 0 {
            return Err(CatalogError::EmptyBuckets);
        }
        Ok(Self { buckets, total })
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn buckets(&self) -> &[Bucket<T>] {
        &self.buckets
    }

    /// Map a roll in `[0, total)` to its bucket. Rolls past the end clamp to
    /// the last bucket with a positive share.
    #[must_use]
    pub fn bucket_for_roll(&self, roll: u32) -> &T {
        let mut cumulative = 0_u32;
        let mut last_live = None;
        for bucket in &self.buckets {
            if bucket.share == 0 {
                continue;
            }
            cumulative = cumulative.saturating_add(bucket.share);
            last_live = Some(&bucket.value);
            if roll < cumulative {
                return &bucket.value;
            }
        }
        last_live.unwrap_or_else(|| unreachable!("constructor guarantees a positive share"))
    }

    pub fn choose<R>(&self, rng: &mut R) -> &T
    where
        R: Rng + ?Sized,
    {
        let roll = rng.gen_range(0..self.total);
        self.bucket_for_roll(roll)
    }
}
