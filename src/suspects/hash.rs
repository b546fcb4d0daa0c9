//! Bucket hashing for the suspect index
//!
//! Sum of the key's UTF-8 bytes, reduced modulo the bucket count. Not
//! collision resistant; keys are a small fixed vocabulary of clue texts.

/// Default number of buckets (prime)
pub const DEFAULT_BUCKETS: usize = 17;

/// Map `key` to a bucket in `[0, bucket_count)`
///
/// `bucket_count` must be non-zero.
#[inline]
pub fn hash_key(key: &str, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0, "bucket count must be non-zero");
    let sum = key
        .bytes()
        .fold(0u32, |acc, byte| acc.wrapping_add(u32::from(byte)));
    sum as usize % bucket_count
}
