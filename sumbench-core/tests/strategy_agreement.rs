use sumbench_core::{sum, Strategy};

#[test]
fn concrete_sums_match_known_values() {
    assert_eq!(sum(12345), 76205685);
    assert_eq!(sum(12345), 12345 * 12346 / 2);
    assert_eq!(sum(14), 105);
    assert_eq!(sum(120), 7260);
    assert_eq!(sum(0), 0);
}

#[test]
fn negative_inputs_reflect_without_negation() {
    assert_eq!(sum(-15), sum(15));
    assert_eq!(sum(-15), 120);
    assert_eq!(sum(-1), 1);
    assert_eq!(sum(-30), 465);
}

#[test]
fn strategies_agree_on_reference_inputs() {
    for n in [15, -13, 7, 8, -30, 0, 14, -15, 120] {
        let expected = sum(n);
        for strategy in Strategy::ALL {
            assert_eq!(
                strategy.eval(n),
                expected,
                "strategy {strategy} disagrees at n = {n}"
            );
        }
    }
}

#[test]
fn repeated_evaluation_is_stable() {
    for strategy in Strategy::ALL {
        let first = strategy.eval(-15);
        for _ in 0..100 {
            assert_eq!(strategy.eval(-15), first, "{strategy} drifted");
        }
    }
}

#[test]
fn range_accumulation_matches_hand_computed_total() {
    // sum over u in [-3, 3): sum(3) + sum(2) + sum(1) + 0 + 0 + 0
    let total: i64 = (-3..3).map(sum).sum();
    assert_eq!(total, 10);

    let total: i64 = (0..8).map(sum).sum();
    assert_eq!(total, 84);
}
