use pose_classifier::models::{BlazePoseLandmark, Landmark, BLAZEPOSE_LANDMARK_COUNT};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .init();
    });
}

/// Full BlazePose frame with the named joints placed and every other landmark parked on the head
pub fn frame_with(joints: &[(BlazePoseLandmark, f64, f64)]) -> Vec<Landmark> {
    let mut landmarks = vec![Landmark::new(250.0, 100.0, 0.0); BLAZEPOSE_LANDMARK_COUNT];
    for &(joint, x, y) in joints {
        landmarks[joint.index()] = Landmark::new(x, y, 0.0);
    }
    landmarks
}

/// Arms straight out, legs straight: elbows and knees at 180, shoulders near 93
pub fn t_pose_frame() -> Vec<Landmark> {
    use BlazePoseLandmark::*;

    frame_with(&[
        (LeftShoulder, 300.0, 200.0),
        (LeftElbow, 400.0, 200.0),
        (LeftWrist, 500.0, 200.0),
        (RightShoulder, 200.0, 200.0),
        (RightElbow, 100.0, 200.0),
        (RightWrist, 0.0, 200.0),
        (LeftHip, 290.0, 400.0),
        (RightHip, 210.0, 400.0),
        (LeftKnee, 290.0, 550.0),
        (RightKnee, 210.0, 550.0),
        (LeftAnkle, 290.0, 700.0),
        (RightAnkle, 210.0, 700.0),
    ])
}

/// Shift every landmark by the same offset
pub fn translated(landmarks: &[Landmark], dx: f64, dy: f64) -> Vec<Landmark> {
    landmarks
        .iter()
        .map(|lm| Landmark::new(lm.x + dx, lm.y + dy, lm.z))
        .collect()
}

/// Edge distance computed from scratch, independent of the library
pub fn edge_distance(value: f64, low: f64, high: f64) -> f64 {
    let to_low = (value - low).abs();
    let to_high = (value - high).abs();
    if to_low < to_high {
        to_low
    } else {
        to_high
    }
}
