use proptest::prelude::*;
use ramswap::status::{StatusLevel, classify};
use ramswap::system::meminfo::{MEM_AVAILABLE, MEM_TOTAL, RawStats, SWAP_FREE, SWAP_TOTAL};
use ramswap::system::utilization::{memory_utilization, swap_utilization};

fn stats(pairs: &[(&str, u64)]) -> RawStats {
    pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
}

proptest! {
    #[test]
    fn memory_ratio_strictly_inside_unit_interval(
        (total, available) in (2u64..1_000_000_000).prop_flat_map(|t| (Just(t), 1..t)),
    ) {
        let ratio = memory_utilization(&stats(&[(MEM_TOTAL, total), (MEM_AVAILABLE, available)]));
        prop_assert!(ratio > 0.0 && ratio < 1.0, "ratio {} for {}/{}", ratio, available, total);
    }

    #[test]
    fn ratios_are_always_finite_and_bounded(
        mem_total in any::<u64>(),
        mem_available in any::<u64>(),
        swap_total in any::<u64>(),
        swap_free in any::<u64>(),
    ) {
        let s = stats(&[
            (MEM_TOTAL, mem_total),
            (MEM_AVAILABLE, mem_available),
            (SWAP_TOTAL, swap_total),
            (SWAP_FREE, swap_free),
        ]);
        for ratio in [memory_utilization(&s), swap_utilization(&s)] {
            prop_assert!(ratio.is_finite());
            prop_assert!((0.0..=1.0).contains(&ratio));
        }
    }

    #[test]
    fn classification_is_monotonic(
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        warn in 0.0f64..=1.0,
        span in 0.0f64..=1.0,
    ) {
        let critical = warn + span;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(lo, warn, critical) <= classify(hi, warn, critical));
    }
}

#[test]
fn zero_or_missing_total_is_zero() {
    assert_eq!(memory_utilization(&stats(&[(MEM_TOTAL, 0)])), 0.0);
    assert_eq!(memory_utilization(&RawStats::new()), 0.0);
    assert_eq!(swap_utilization(&stats(&[(SWAP_TOTAL, 0), (SWAP_FREE, 0)])), 0.0);
}

#[test]
fn memory_threshold_examples() {
    assert_eq!(classify(0.76, 0.75, 0.9), StatusLevel::Warn);
    assert_eq!(classify(0.91, 0.75, 0.9), StatusLevel::Critical);
    assert_eq!(classify(0.10, 0.75, 0.9), StatusLevel::Ok);
}
