use std::collections::HashMap;
use std::hash::Hash;

/// Groups `items` by `key`, keeping input order inside each bucket.
///
/// Buckets are created on first use, so every bucket holds at least one item.
pub fn bucketize<T, K, I, F>(items: I, mut key: F) -> HashMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut buckets: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        buckets.entry(key(&item)).or_default().push(item);
    }
    buckets
}
