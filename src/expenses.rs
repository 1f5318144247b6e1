//! Finding the entries of an expense report which sum up to [`TARGET`].
//!
//! All of the searches are brute force over ascending index combinations; the first combination
//! in lexicographic index order wins, exactly as with the equivalent nested for-loops.

use itertools::Itertools;
use num_bigint::BigInt;

pub const TARGET: i64 = 2020;

/// `N` distinct positions of the dataset, ascending, and the values found at them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination<const N: usize> {
    pub indices: [usize; N],
    pub values: [i64; N],
}

impl<const N: usize> Combination<N> {
    pub fn sum(&self) -> i128 {
        self.values.iter().map(|&v| i128::from(v)).sum()
    }

    pub fn product(&self) -> BigInt {
        self.values
            .iter()
            .fold(BigInt::from(1), |acc, &v| acc * BigInt::from(v))
    }
}

pub fn find_pair(dataset: &[i64]) -> Option<Combination<2>> {
    find_summing::<2>(dataset)
}

pub fn find_triplet(dataset: &[i64]) -> Option<Combination<3>> {
    find_summing::<3>(dataset)
}

/// Returns the lowest (lexicographically) combination of `N` distinct positions summing up to
/// [`TARGET`], or `None` if there is no such combination.
pub fn find_summing<const N: usize>(dataset: &[i64]) -> Option<Combination<N>> {
    // i128 since three i64 cannot overflow it
    let target = i128::from(TARGET);

    (0..dataset.len())
        .combinations(N)
        .map(|found| {
            let mut indices = [0; N];
            indices.copy_from_slice(&found);
            let values = indices.map(|i| dataset[i]);
            Combination { indices, values }
        })
        .find(|combination| combination.sum() == target)
}
