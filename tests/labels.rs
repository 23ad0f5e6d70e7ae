use std::collections::{HashMap, HashSet};

use fictionero::labels::{assign_cue_colors, DEFAULT_CUE_COLORS};
use fictionero::{assign_labels, assign_labels_with_entropy, Condition, LabelError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use statrs::distribution::{ChiSquared, ContinuousCDF};

fn colors() -> Vec<String> {
    DEFAULT_CUE_COLORS.iter().map(|c| c.to_string()).collect()
}

#[test]
fn assignment_is_a_bijection_for_every_seed() {
    for seed in 0..500 {
        let map = assign_cue_colors(&colors(), &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(map.len(), Condition::ALL.len());

        let labels: HashSet<&String> = map.labels().collect();
        assert_eq!(labels.len(), Condition::ALL.len());
        assert!(labels.iter().all(|l| colors().contains(l)));

        for condition in Condition::ALL {
            assert_eq!(map.categories().filter(|c| **c == condition).count(), 1);
        }
    }
}

#[test]
fn ordered_assignments_are_uniform() {
    // 3 colors onto 2 conditions: 6 equally likely ordered outcomes.
    const TRIALS: u64 = 6_000;
    let mut counts: HashMap<(String, String), u64> = HashMap::new();
    for seed in 0..TRIALS {
        let map = assign_cue_colors(&colors(), &mut StdRng::seed_from_u64(seed)).unwrap();
        let key = (
            map.get(&Condition::Reality).unwrap().clone(),
            map.get(&Condition::Fiction).unwrap().clone(),
        );
        *counts.entry(key).or_default() += 1;
    }
    assert_eq!(counts.len(), 6);

    let expected = TRIALS as f64 / 6.0;
    let chi2: f64 = counts
        .values()
        .map(|&observed| {
            let d = observed as f64 - expected;
            d * d / expected
        })
        .sum();
    let dist = ChiSquared::new(5.0).unwrap();
    let p_value = 1.0 - dist.cdf(chi2);
    assert!(p_value > 0.001, "chi2={chi2:.2} p={p_value:.5} counts={counts:?}");

    // Marginals: each color lands on Reality about a third of the time.
    for color in colors() {
        let on_reality: u64 = counts
            .iter()
            .filter(|((reality, _), _)| *reality == color)
            .map(|(_, n)| *n)
            .sum();
        let share = on_reality as f64 / TRIALS as f64;
        assert!((share - 1.0 / 3.0).abs() < 0.035, "{color}: {share}");
    }
}

#[test]
fn same_seed_same_mapping() {
    let a = assign_cue_colors(&colors(), &mut StdRng::seed_from_u64(2024)).unwrap();
    let b = assign_cue_colors(&colors(), &mut StdRng::seed_from_u64(2024)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn entropy_calls_are_valid_and_vary() {
    let mut seen = HashSet::new();
    for _ in 0..200 {
        let map = assign_labels_with_entropy(&Condition::ALL, &colors()).unwrap();
        seen.insert(map.to_string());
    }
    // 6 possible outcomes; 200 independent draws all landing on one is ~6^-199.
    assert!(seen.len() > 1);
}

#[test]
fn insufficient_labels_error() {
    let err = assign_labels(
        &["a", "b", "c"],
        &["red", "blue"],
        &mut StdRng::seed_from_u64(0),
    )
    .unwrap_err();
    assert_eq!(
        err,
        LabelError::InsufficientLabels {
            categories: 3,
            candidates: 2
        }
    );
    assert!(err.to_string().contains("insufficient labels"));
}

#[test]
fn extends_beyond_two_categories() {
    let cats = ["reality", "fiction", "unknown"];
    let labels = ["red", "blue", "green", "yellow"];
    let map = assign_labels(&cats, &labels, &mut StdRng::seed_from_u64(8)).unwrap();
    assert_eq!(map.len(), 3);
    let used: HashSet<&&str> = map.labels().collect();
    assert_eq!(used.len(), 3);
    for cat in cats {
        assert!(map.contains(&cat));
    }
}
