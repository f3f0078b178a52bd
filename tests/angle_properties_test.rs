//! Property tests for joint angle geometry and matching
//!
//! Tests cover:
//! - Output range of the angle calculator
//! - Invariance to translation and positive scaling
//! - Straight joints
//! - Single-signature catalogues never reject

use pose_classifier::models::{AngleRange, Landmark, PoseSignature, FEATURE_COUNT};
use pose_classifier::services::{angle_at, PoseCatalogue, PoseMatcher};
use proptest::prelude::*;

const COORD: std::ops::Range<f64> = -2000.0..2000.0;

fn point() -> impl Strategy<Value = Landmark> {
    (COORD, COORD, -1.0..1.0f64).prop_map(|(x, y, z)| Landmark::new(x, y, z))
}

/// Smallest difference between two angles on the circle
fn circular_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

fn well_separated(a: &Landmark, b: &Landmark, c: &Landmark) -> bool {
    a.distance_to(b) > 1.0 && c.distance_to(b) > 1.0
}

proptest! {
    #[test]
    fn angle_is_in_range(a in point(), b in point(), c in point()) {
        let angle = angle_at(&a, &b, &c);
        prop_assert!((0.0..360.0).contains(&angle), "angle {} out of range", angle);
    }

    #[test]
    fn angle_ignores_translation(
        a in point(),
        b in point(),
        c in point(),
        dx in COORD,
        dy in COORD,
    ) {
        prop_assume!(well_separated(&a, &b, &c));

        let shift = |lm: &Landmark| Landmark::new(lm.x + dx, lm.y + dy, lm.z);
        let original = angle_at(&a, &b, &c);
        let moved = angle_at(&shift(&a), &shift(&b), &shift(&c));

        prop_assert!(circular_difference(original, moved) < 1e-6);
    }

    #[test]
    fn angle_ignores_positive_scaling(
        a in point(),
        b in point(),
        c in point(),
        factor in 0.01..100.0f64,
    ) {
        prop_assume!(well_separated(&a, &b, &c));

        let scale = |lm: &Landmark| Landmark::new(lm.x * factor, lm.y * factor, lm.z * factor);
        let original = angle_at(&a, &b, &c);
        let scaled = angle_at(&scale(&a), &scale(&b), &scale(&c));

        prop_assert!(circular_difference(original, scaled) < 1e-6);
    }

    #[test]
    fn straight_joint_is_180(a in point(), b in point(), stretch in 0.1..10.0f64) {
        prop_assume!(a.distance_to(&b) > 1.0);

        let c = Landmark::new(
            b.x + (b.x - a.x) * stretch,
            b.y + (b.y - a.y) * stretch,
            0.0,
        );
        let angle = angle_at(&a, &b, &c);

        prop_assert!((angle - 180.0).abs() < 1e-6, "angle {}", angle);
    }

    #[test]
    fn single_signature_never_rejects(
        features in prop::collection::vec(0.0..360.0f64, FEATURE_COUNT),
        low in 0.0..180.0f64,
        width in 0.0..180.0f64,
    ) {
        let catalogue = PoseCatalogue::new(vec![PoseSignature::new(
            "Only",
            vec![AngleRange::new(low, low + width); FEATURE_COUNT],
        )])
        .unwrap();

        let result = PoseMatcher::new(&catalogue).match_features(&features).unwrap();
        prop_assert_eq!(result.pose, "Only");
        prop_assert!(result.deviations.iter().all(|d| *d >= 0.0));
    }

    #[test]
    fn builtin_matching_is_minimal(
        features in prop::collection::vec(0.0..360.0f64, FEATURE_COUNT),
    ) {
        let catalogue = PoseCatalogue::builtin();
        let result = PoseMatcher::new(catalogue).match_features(&features).unwrap();

        for (_, signature) in catalogue.all_signatures() {
            let deviations = PoseMatcher::deviations(&features, signature).unwrap();
            prop_assert!(result.distance <= PoseMatcher::aggregate(&deviations));
        }
    }
}
