//! Chain entry type and bucket-table helpers.

use safe_bump::Idx;

/// Number of buckets a fresh table starts with.
pub const INITIAL_BUCKETS: usize = 16;

/// Factor by which the table grows on rebuild.
pub const GROWTH_FACTOR: usize = 2;

/// Chain entry storing a key-value pair and the link to its successor.
pub struct Entry<V> {
    /// The 64-bit key.
    pub key: i64,
    /// The value.
    pub value: V,
    /// Index of the next entry in the same bucket chain.
    pub next: Option<Idx<Entry<V>>>,
}

// ---------------------------------------------------------------------------
// Bucket helpers
// ---------------------------------------------------------------------------

/// Returns the bucket index for `key` in a table of `bucket_count` buckets.
///
/// The remainder is taken against `bucket_count - 1`, truncated to a signed
/// 32-bit value (two's-complement wrap), then made absolute with
/// [`i32::wrapping_abs`]. In a 16-bucket table keys `1` and `16` therefore
/// share bucket 1 (`16 % 15 == 1`), and `-16` lands there too
/// (`|-16 % 15| == 1`).
#[inline]
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub const fn bucket_index(key: i64, bucket_count: usize) -> usize {
    let max_index = bucket_count as i64 - 1;
    let rem = (key % max_index) as i32;
    rem.wrapping_abs() as usize
}

/// Returns `true` once `size` entries fill a `bucket_count` table to 3/4 or
/// beyond — the point at which the next insert must rebuild first.
///
/// Integer form of the 0.75 load factor; exact, since 0.75 is exact in
/// binary.
#[inline]
#[must_use]
pub const fn exceeds_load_factor(size: usize, bucket_count: usize) -> bool {
    size * 4 >= bucket_count * 3
}
