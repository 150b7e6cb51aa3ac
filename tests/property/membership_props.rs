//! Bloom filter properties.
//!
//! - No false negatives: every inserted item is reported present
//! - Positions stay inside the bit vector
//! - The measured false-positive rate tracks the formula

use proptest::prelude::*;
use suffixkart::membership::false_positive_rate;
use suffixkart::verify::contracts::check_no_false_negatives;
use suffixkart::{BloomConfig, MembershipIndex};

// ============================================================================
// STRATEGIES
// ============================================================================

fn item_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 éüñ]{0,12}").unwrap()
}

fn config_strategy() -> impl Strategy<Value = BloomConfig> {
    (1usize..4096, 1u32..12).prop_map(|(bits, hashes)| BloomConfig::with_size(bits, hashes))
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: Inserted items are always reported present.
    #[test]
    fn prop_no_false_negatives(
        config in config_strategy(),
        items in prop::collection::vec(item_strategy(), 0..64),
    ) {
        let mut filter = MembershipIndex::new(config).unwrap();
        filter.insert_all(&items);
        check_no_false_negatives(&filter, &items[..]);
        for item in &items {
            prop_assert!(filter.probably_contains(item), "false negative for {:?}", item);
        }
    }

    /// Property: Every probe position is below the bit count.
    #[test]
    fn prop_positions_in_range(config in config_strategy(), item in item_strategy()) {
        let filter = MembershipIndex::new(config).unwrap();
        let positions: Vec<usize> = filter.positions(&item).collect();
        prop_assert_eq!(positions.len(), config.hashes as usize);
        prop_assert!(positions.iter().all(|&p| p < config.bits));
    }

    /// Property: Inserting never clears bits.
    #[test]
    fn prop_bits_set_monotonic(items in prop::collection::vec(item_strategy(), 1..32)) {
        let mut filter = MembershipIndex::new(BloomConfig::with_size(512, 3)).unwrap();
        let mut previous = 0;
        for item in &items {
            filter.insert(item);
            let now = filter.bits_set();
            prop_assert!(now >= previous);
            previous = now;
        }
    }
}

/// Empirical false-positive rate at the default size stays near the formula.
#[test]
fn test_false_positive_rate_close_to_theory() {
    let config = BloomConfig::with_size(8192, 4);
    let mut filter = MembershipIndex::new(config).unwrap();
    filter.insert_all((0..1000).map(|i| format!("inserted-{}", i)));

    let trials = 20_000;
    let hits = (0..trials)
        .filter(|i| filter.probably_contains(&format!("absent-{}", i)))
        .count();
    let measured = hits as f64 / trials as f64;
    let expected = false_positive_rate(config.bits, config.hashes, 1000);

    // expected ≈ 0.024; allow generous slack for hash quality and sampling.
    assert!(
        measured < expected * 2.0 + 0.005,
        "measured {:.4} vs expected {:.4}",
        measured,
        expected
    );
}
