use itertools::Itertools;

use crate::error::SortError;

/// Sorts `xs` in place into non-decreasing order.
///
/// Two-pointer quicksort with the pivot taken from the middle position of
/// the current range. Not stable. Empty and single element slices are left
/// untouched.
pub fn sort<T: Ord + Copy>(xs: &mut [T]) {
    if xs.len() > 1 {
        qsort(xs);
    }
}

/// Sorts the inclusive index range `[low, high]` of `xs`, leaving everything
/// outside of it in place.
pub fn sort_range<T: Ord + Copy>(xs: &mut [T], low: usize, high: usize) -> Result<(), SortError> {
    if low > high || high >= xs.len() {
        return Err(SortError::InvalidRange {
            low,
            high,
            len: xs.len(),
        });
    }
    sort(&mut xs[low..=high]);
    Ok(())
}

/// Checks that `xs` is non-decreasing and reports the first inversion.
pub fn verify_sorted<T: Ord>(xs: &[T]) -> Result<(), SortError> {
    match xs.iter().tuple_windows().position(|(a, b)| a > b) {
        Some(index) => Err(SortError::Unsorted { index }),
        None => Ok(()),
    }
}

// Requires xs.len() >= 2. Indices are signed since `j` may step below zero.
fn qsort<T: Ord + Copy>(xs: &mut [T]) {
    let high = xs.len() as isize - 1;
    let pivot = xs[(high / 2) as usize];
    let mut i: isize = 0;
    let mut j = high;
    while i <= j {
        while xs[i as usize] < pivot {
            i += 1;
        }
        while xs[j as usize] > pivot {
            j -= 1;
        }
        if i <= j {
            xs.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }

    if 0 < j {
        qsort(&mut xs[..=j as usize]);
    }
    if i < high {
        qsort(&mut xs[i as usize..]);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::random::{generate, Xoroshiro128Plus};
    use itertools::Itertools;

    fn sorted_copy(xs: &[i64]) -> Vec<i64> {
        xs.iter().copied().sorted().collect_vec()
    }

    #[test]
    fn empty() {
        let mut xs: Vec<i64> = vec![];
        sort(&mut xs);
        assert!(xs.is_empty());
    }

    #[test]
    fn single_element() {
        let mut xs = vec![5i64];
        sort(&mut xs);
        assert_eq!(xs, [5]);
    }

    #[test]
    fn two_elements() {
        let mut xs = vec![3i64, 1];
        sort(&mut xs);
        assert_eq!(xs, [1, 3]);

        let mut xs = vec![1i64, 3];
        sort(&mut xs);
        assert_eq!(xs, [1, 3]);
    }

    #[test]
    fn duplicates_and_large_values() {
        let mut xs = vec![5i64, -3, 0, 5, -3, 1 << 62];
        sort(&mut xs);
        assert_eq!(xs, [-3, -3, 0, 5, 5, 1 << 62]);
    }

    #[test]
    fn extremes() {
        let mut xs = vec![i64::MAX, 0, i64::MIN, -1, i64::MAX, i64::MIN];
        sort(&mut xs);
        assert_eq!(xs, [i64::MIN, i64::MIN, -1, 0, i64::MAX, i64::MAX]);
    }

    #[test]
    fn already_sorted_is_unchanged() {
        let mut xs = (-500i64..500).collect_vec();
        let expected = xs.clone();
        sort(&mut xs);
        assert_eq!(xs, expected);
        sort(&mut xs);
        assert_eq!(xs, expected);
    }

    #[test]
    fn reversed() {
        let mut xs = (0i64..1000).rev().collect_vec();
        sort(&mut xs);
        assert_eq!(xs, (0i64..1000).collect_vec());
    }

    #[test]
    fn all_equal() {
        let mut xs = vec![7i64; 257];
        sort(&mut xs);
        assert_eq!(xs, vec![7i64; 257]);
    }

    #[test]
    fn random_matches_std_sort() {
        let mut rng = Xoroshiro128Plus::seed_from(1234);
        for len in [2, 3, 10, 99, 1000, 10_000] {
            let mut xs = generate(len, &mut rng);
            let expected = sorted_copy(&xs);
            sort(&mut xs);
            assert_eq!(xs.len(), len);
            assert_eq!(xs, expected);
        }
    }

    #[test]
    fn few_distinct_values() {
        let mut rng = Xoroshiro128Plus::seed_from(99);
        let mut xs = generate(5000, &mut rng)
            .into_iter()
            .map(|x| x.rem_euclid(4))
            .collect_vec();
        let expected = sorted_copy(&xs);
        sort(&mut xs);
        assert_eq!(xs, expected);
    }

    #[test]
    fn range_leaves_outside_untouched() {
        let mut xs = vec![9i64, 8, 7, 6, 5, 4, 3];
        sort_range(&mut xs, 2, 5).expect("valid range");
        assert_eq!(xs, [9, 8, 4, 5, 6, 7, 3]);
    }

    #[test]
    fn range_whole_and_single() {
        let mut xs = vec![2i64, 1, 0];
        sort_range(&mut xs, 1, 1).expect("valid range");
        assert_eq!(xs, [2, 1, 0]);
        sort_range(&mut xs, 0, 2).expect("valid range");
        assert_eq!(xs, [0, 1, 2]);
    }

    #[test]
    fn invalid_ranges() {
        let mut xs = vec![1i64, 2, 3];
        assert_eq!(
            sort_range(&mut xs, 2, 1),
            Err(SortError::InvalidRange {
                low: 2,
                high: 1,
                len: 3
            })
        );
        assert_eq!(
            sort_range(&mut xs, 0, 3),
            Err(SortError::InvalidRange {
                low: 0,
                high: 3,
                len: 3
            })
        );

        let mut empty: Vec<i64> = vec![];
        assert!(sort_range(&mut empty, 0, 0).is_err());
    }

    #[test]
    fn verify() {
        assert_eq!(verify_sorted::<i64>(&[]), Ok(()));
        assert_eq!(verify_sorted(&[1i64]), Ok(()));
        assert_eq!(verify_sorted(&[1i64, 1, 2]), Ok(()));
        assert_eq!(
            verify_sorted(&[1i64, 3, 2, 0]),
            Err(SortError::Unsorted { index: 1 })
        );
    }

    #[test]
    fn sorted_output_verifies() {
        let mut rng = Xoroshiro128Plus::seed_from(7);
        let mut xs = generate(20_000, &mut rng);
        sort(&mut xs);
        assert_eq!(verify_sorted(&xs), Ok(()));
    }
}
