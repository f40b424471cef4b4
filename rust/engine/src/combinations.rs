/// Iterator over every `k`-element subset of `0..n`, as sorted index
/// vectors in lexicographic order.
///
/// ```
/// use casino_engine::combinations::combinations;
///
/// let all: Vec<Vec<usize>> = combinations(4, 2).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1]);
/// assert_eq!(all[5], vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

pub fn combinations(n: usize, k: usize) -> Combinations {
    Combinations {
        n,
        indices: (0..k).collect(),
        done: k > n,
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // advance the rightmost index that still has room
        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_binomials() {
        assert_eq!(combinations(7, 5).count(), 21);
        assert_eq!(combinations(6, 5).count(), 6);
        assert_eq!(combinations(5, 5).count(), 1);
        assert_eq!(combinations(52, 2).count(), 1326);
    }

    #[test]
    fn too_few_elements_yields_nothing() {
        assert_eq!(combinations(4, 5).count(), 0);
    }

    #[test]
    fn empty_subset_is_yielded_once() {
        let all: Vec<Vec<usize>> = combinations(3, 0).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn subsets_are_sorted_and_unique() {
        let all: Vec<Vec<usize>> = combinations(7, 5).collect();
        for s in &all {
            assert!(s.windows(2).all(|w| w[0] < w[1]));
        }
        let mut dedup = all.clone();
        dedup.dedup();
        assert_eq!(dedup.len(), all.len());
        assert_eq!(all.first(), Some(&vec![0, 1, 2, 3, 4]));
        assert_eq!(all.last(), Some(&vec![2, 3, 4, 5, 6]));
    }
}
