use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

/// Hashes each of `parts` on its own and folds the per-part hashes with exclusive-or.
pub fn xor_hash<T: Hash>(parts: &[T]) -> u64 {
    parts.iter().fold(0, |acc, part| acc ^ hash_one(part))
}

fn hash_one<T: Hash>(value: &T) -> u64 {
    // There is no way to reset a hasher's state, so we create a new one each time.
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_independent() {
        assert_eq!(xor_hash(&[3i64, 4]), xor_hash(&[4i64, 3]));
    }

    #[test]
    fn single_part_is_its_own_hash() {
        assert_eq!(xor_hash(&[7i64]), hash_one(&7i64));
    }
}
