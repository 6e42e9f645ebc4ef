//! Index combinations in lexicographic order.
//!
//! The bundle search breaks score ties by enumeration order, so both
//! enumerators must yield index vectors in ascending lexicographic order.

/// Multisets of size `k` drawn with repetition from `0..n`, non-decreasing.
#[derive(Debug, Clone)]
pub struct Multisets {
    n: usize,
    indices: Vec<usize>,
    exhausted: bool,
    /// When set, enumeration ends instead of changing `indices[0]`.
    lock_first: bool,
}

impl Multisets {
    /// All multisets, starting at `[0; k]`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: vec![0; k],
            exhausted: n == 0 && k > 0,
            lock_first: false,
        }
    }

    /// Only the contiguous run of multisets whose first index is `first`.
    pub fn with_first(n: usize, k: usize, first: usize) -> Self {
        Self {
            n,
            indices: vec![first; k],
            exhausted: first >= n || k == 0,
            lock_first: true,
        }
    }

    pub fn current(&self) -> Option<&[usize]> {
        if self.exhausted {
            None
        } else {
            Some(&self.indices)
        }
    }

    /// Step to the next multiset.
    pub fn advance(&mut self) {
        if self.exhausted {
            return;
        }
        let Some(last) = self.n.checked_sub(1) else {
            self.exhausted = true;
            return;
        };
        let floor = usize::from(self.lock_first);
        let pivot = (floor..self.indices.len())
            .rev()
            .find(|&i| self.indices[i] != last);
        match pivot {
            Some(i) => {
                let value = self.indices[i] + 1;
                self.indices[i..].iter_mut().for_each(|idx| *idx = value);
            }
            None => self.exhausted = true,
        }
    }
}

impl Iterator for Multisets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.current()?.to_vec();
        self.advance();
        Some(out)
    }
}

/// Subsets of size `k` from `0..n`, strictly increasing.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            exhausted: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let out = self.indices.clone();

        let k = self.indices.len();
        let pivot = (0..k).rev().find(|&i| self.indices[i] != i + self.n - k);
        match pivot {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.exhausted = true,
        }
        Some(out)
    }
}

/// Binomial coefficient C(n, k), saturating at `u64::MAX`.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * u128::from(n - i) / u128::from(i + 1);
        if acc > u128::from(u64::MAX) {
            return u64::MAX;
        }
    }
    acc as u64
}

/// Number of multisets of size `k` from `n` items: C(n + k - 1, k).
pub fn multiset_count(n: usize, k: usize) -> u64 {
    if n == 0 {
        return u64::from(k == 0);
    }
    binomial((n + k - 1) as u64, k as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multisets_lexicographic_order() {
        let all: Vec<Vec<usize>> = Multisets::new(3, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 1],
                vec![1, 2],
                vec![2, 2],
            ]
        );
    }

    #[test]
    fn test_multisets_count_matches_formula() {
        for n in 1..6 {
            for k in 1..5 {
                assert_eq!(Multisets::new(n, k).count() as u64, multiset_count(n, k));
            }
        }
    }

    #[test]
    fn test_multisets_groups_concatenate_to_full_order() {
        let full: Vec<Vec<usize>> = Multisets::new(4, 3).collect();
        let grouped: Vec<Vec<usize>> = (0..4)
            .flat_map(|first| Multisets::with_first(4, 3, first))
            .collect();
        assert_eq!(full, grouped);
    }

    #[test]
    fn test_multisets_single_pick() {
        let all: Vec<Vec<usize>> = Multisets::new(3, 1).collect();
        assert_eq!(all, vec![vec![0], vec![1], vec![2]]);
        assert_eq!(Multisets::with_first(3, 1, 2).count(), 1);
    }

    #[test]
    fn test_multisets_empty_pool() {
        assert_eq!(Multisets::new(0, 2).count(), 0);
        assert_eq!(Multisets::with_first(2, 2, 2).count(), 0);
    }

    #[test]
    fn test_combinations_lexicographic_order() {
        let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_combinations_larger_than_pool() {
        assert_eq!(Combinations::new(3, 4).count(), 0);
        assert_eq!(Combinations::new(3, 3).count(), 1);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(20, 4), 4845);
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(3, 5), 0);
        assert_eq!(multiset_count(20, 10), 20_030_010);
    }
}
