use lazy_static::*;

use crate::BigInt;

/// Largest magnitude served from the constant caches.
pub const MAX_CONSTANT: usize = 16;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_raw(vec![0]   , false),
        BigInt::from_raw(vec![1]   , false),
        BigInt::from_raw(vec![2]   , false),
        BigInt::from_raw(vec![3]   , false),
        BigInt::from_raw(vec![4]   , false),
        BigInt::from_raw(vec![5]   , false),
        BigInt::from_raw(vec![6]   , false),
        BigInt::from_raw(vec![7]   , false),
        BigInt::from_raw(vec![8]   , false),
        BigInt::from_raw(vec![9]   , false),
        BigInt::from_raw(vec![0, 1], false),
        BigInt::from_raw(vec![1, 1], false),
        BigInt::from_raw(vec![2, 1], false),
        BigInt::from_raw(vec![3, 1], false),
        BigInt::from_raw(vec![4, 1], false),
        BigInt::from_raw(vec![5, 1], false),
        BigInt::from_raw(vec![6, 1], false),
    ];
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_raw(vec![0]   , false), // zero carries no sign
        BigInt::from_raw(vec![1]   , true),
        BigInt::from_raw(vec![2]   , true),
        BigInt::from_raw(vec![3]   , true),
        BigInt::from_raw(vec![4]   , true),
        BigInt::from_raw(vec![5]   , true),
        BigInt::from_raw(vec![6]   , true),
        BigInt::from_raw(vec![7]   , true),
        BigInt::from_raw(vec![8]   , true),
        BigInt::from_raw(vec![9]   , true),
        BigInt::from_raw(vec![0, 1], true),
        BigInt::from_raw(vec![1, 1], true),
        BigInt::from_raw(vec![2, 1], true),
        BigInt::from_raw(vec![3, 1], true),
        BigInt::from_raw(vec![4, 1], true),
        BigInt::from_raw(vec![5, 1], true),
        BigInt::from_raw(vec![6, 1], true),
    ];
}
