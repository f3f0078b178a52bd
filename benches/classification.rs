//! Benchmarks for per-frame pose classification.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pose_classifier::models::{BlazePoseLandmark, Landmark, BLAZEPOSE_LANDMARK_COUNT};
use pose_classifier::services::{angle_at, FeatureExtractor, PoseCatalogue, PoseClassifier, PoseMatcher};

fn create_test_frame() -> Vec<Landmark> {
    use BlazePoseLandmark::*;

    let mut landmarks = vec![Landmark::new(250.0, 100.0, 0.0); BLAZEPOSE_LANDMARK_COUNT];
    for (joint, x, y) in [
        (LeftShoulder, 300.0, 200.0),
        (LeftElbow, 390.0, 230.0),
        (LeftWrist, 470.0, 180.0),
        (RightShoulder, 200.0, 200.0),
        (RightElbow, 110.0, 230.0),
        (RightWrist, 30.0, 180.0),
        (LeftHip, 290.0, 400.0),
        (RightHip, 210.0, 400.0),
        (LeftKnee, 330.0, 520.0),
        (RightKnee, 170.0, 520.0),
        (LeftAnkle, 300.0, 680.0),
        (RightAnkle, 200.0, 680.0),
    ] {
        landmarks[joint.index()] = Landmark::new(x, y, 0.0);
    }
    landmarks
}

fn benchmark_angle(c: &mut Criterion) {
    let a = Landmark::new(558.0, 326.0, 0.0);
    let b = Landmark::new(642.0, 333.0, 0.0);
    let d = Landmark::new(718.0, 321.0, 0.0);

    c.bench_function("angle_at", |bench| {
        bench.iter(|| angle_at(black_box(&a), black_box(&b), black_box(&d)))
    });
}

fn benchmark_pipeline(c: &mut Criterion) {
    let frame = create_test_frame();
    let extractor = FeatureExtractor::new();
    let matcher = PoseMatcher::new(PoseCatalogue::builtin());
    let classifier = PoseClassifier::new(PoseCatalogue::builtin());
    let features = extractor.extract(&frame).unwrap();

    c.bench_function("extract_features", |b| {
        b.iter(|| extractor.extract(black_box(&frame)))
    });

    c.bench_function("match_builtin_catalogue", |b| {
        b.iter(|| matcher.match_features(black_box(features.as_slice())))
    });

    c.bench_function("classify_frame", |b| {
        b.iter(|| classifier.classify(black_box(&frame)))
    });
}

criterion_group!(benches, benchmark_angle, benchmark_pipeline);
criterion_main!(benches);
