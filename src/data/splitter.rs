// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles samples with a seeded RNG and splits them into:
//   - Training set: used to fit the regression coefficients
//   - Test set:     held out, only used for reporting metrics
//
// Sizing rule:
//   n_test  = ceil(test_fraction * n)
//   n_train = n - n_test
//
// e.g. 442 rows at 0.2 → 89 test rows, 353 training rows.
//
// The RNG is a StdRng seeded from a fixed u64, so the same seed
// always produces the same permutation and therefore the same
// fitted model.
//
// Reference: rand crate documentation (SeedableRng, SliceRandom)

use anyhow::{bail, Result};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Shuffle `samples` with a generator seeded from `seed` and split
/// them into (train, test).
///
/// # Arguments
/// * `samples`       - All available samples (consumed by this function)
/// * `test_fraction` - Proportion held out for testing, strictly inside (0, 1)
/// * `seed`          - RNG seed; identical seeds give identical splits
///
/// # Errors
/// Fails if the fraction is out of range or either side would be empty.
pub fn split_train_test<T>(
    mut samples:   Vec<T>,
    test_fraction: f64,
    seed:          u64,
) -> Result<(Vec<T>, Vec<T>)> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        bail!("test fraction must lie strictly between 0 and 1, got {test_fraction}");
    }

    let total  = samples.len();
    let n_test = (test_fraction * total as f64).ceil() as usize;

    if n_test == 0 || n_test >= total {
        bail!(
            "cannot split {total} samples with test fraction {test_fraction}: \
             {n_test} test / {} train",
            total.saturating_sub(n_test)
        );
    }

    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    // After this: samples = [0..n_train], test = [n_train..total]
    let test = samples.split_off(total - n_test);

    tracing::debug!(
        "Dataset split: {} training, {} test (seed {})",
        samples.len(),
        test.len(),
        seed,
    );

    Ok((samples, test))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, test)     = split_train_test(items, 0.2, 42).unwrap();
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(),  20);
    }

    #[test]
    fn test_test_size_rounds_up() {
        let items: Vec<usize> = (0..442).collect();
        let (train, test)     = split_train_test(items, 0.2, 42).unwrap();
        assert_eq!(test.len(),  89);
        assert_eq!(train.len(), 353);
    }

    #[test]
    fn test_all_items_preserved() {
        let items: Vec<usize> = (0..50).collect();
        let (train, test)     = split_train_test(items, 0.3, 7).unwrap();

        let mut all: Vec<usize> = train.into_iter().chain(test).collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let a = split_train_test((0..200).collect::<Vec<usize>>(), 0.2, 42).unwrap();
        let b = split_train_test((0..200).collect::<Vec<usize>>(), 0.2, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_split() {
        let a = split_train_test((0..200).collect::<Vec<usize>>(), 0.2, 1).unwrap();
        let b = split_train_test((0..200).collect::<Vec<usize>>(), 0.2, 2).unwrap();
        assert_ne!(a.1, b.1);
    }

    #[test]
    fn test_rejects_out_of_range_fraction() {
        assert!(split_train_test((0..10).collect::<Vec<usize>>(), 0.0, 42).is_err());
        assert!(split_train_test((0..10).collect::<Vec<usize>>(), 1.0, 42).is_err());
        assert!(split_train_test((0..10).collect::<Vec<usize>>(), f64::NAN, 42).is_err());
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        assert!(split_train_test(items, 0.2, 42).is_err());
    }

    #[test]
    fn test_single_sample_cannot_be_split() {
        // ceil(0.2 * 1) = 1 test row leaves nothing to train on
        assert!(split_train_test(vec![1], 0.2, 42).is_err());
    }
}
