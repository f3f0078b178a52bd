/// Joint definitions and per-frame angle features

use serde::{Deserialize, Serialize};

use super::landmark::BlazePoseLandmark;

/// Three landmarks defining one planar joint angle, measured at `vertex`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointTriple {
    /// Feature name (e.g., "left_elbow")
    pub name: &'static str,
    pub first: BlazePoseLandmark,
    pub vertex: BlazePoseLandmark,
    pub last: BlazePoseLandmark,
}

impl JointTriple {
    pub const fn new(
        name: &'static str,
        first: BlazePoseLandmark,
        vertex: BlazePoseLandmark,
        last: BlazePoseLandmark,
    ) -> Self {
        Self {
            name,
            first,
            vertex,
            last,
        }
    }

    /// Largest landmark index this triple reads
    pub fn max_index(&self) -> usize {
        self.first
            .index()
            .max(self.vertex.index())
            .max(self.last.index())
    }
}

/// Version of the joint table below. Bump together with the catalogue
/// version whenever a feature column is added, removed or reordered.
pub const JOINT_TABLE_VERSION: u32 = 1;

/// Feature triples, in feature vector order.
///
/// The right shoulder is measured hip→shoulder→elbow while the left is
/// elbow→shoulder→hip, so both sides read the same for a mirrored pose.
pub const FEATURE_TRIPLES: [JointTriple; 6] = [
    JointTriple::new(
        "left_elbow",
        BlazePoseLandmark::LeftShoulder,
        BlazePoseLandmark::LeftElbow,
        BlazePoseLandmark::LeftWrist,
    ),
    JointTriple::new(
        "right_elbow",
        BlazePoseLandmark::RightShoulder,
        BlazePoseLandmark::RightElbow,
        BlazePoseLandmark::RightWrist,
    ),
    JointTriple::new(
        "left_shoulder",
        BlazePoseLandmark::LeftElbow,
        BlazePoseLandmark::LeftShoulder,
        BlazePoseLandmark::LeftHip,
    ),
    JointTriple::new(
        "right_shoulder",
        BlazePoseLandmark::RightHip,
        BlazePoseLandmark::RightShoulder,
        BlazePoseLandmark::RightElbow,
    ),
    JointTriple::new(
        "left_knee",
        BlazePoseLandmark::LeftHip,
        BlazePoseLandmark::LeftKnee,
        BlazePoseLandmark::LeftAnkle,
    ),
    JointTriple::new(
        "right_knee",
        BlazePoseLandmark::RightHip,
        BlazePoseLandmark::RightKnee,
        BlazePoseLandmark::RightAnkle,
    ),
];

/// Number of components in every feature vector
pub const FEATURE_COUNT: usize = FEATURE_TRIPLES.len();

/// Diagnostic triples, reported alongside the features but never matched
pub const AUXILIARY_TRIPLES: [JointTriple; 2] = [
    JointTriple::new(
        "left_hip",
        BlazePoseLandmark::LeftShoulder,
        BlazePoseLandmark::LeftHip,
        BlazePoseLandmark::LeftKnee,
    ),
    JointTriple::new(
        "right_hip",
        BlazePoseLandmark::RightShoulder,
        BlazePoseLandmark::RightHip,
        BlazePoseLandmark::RightKnee,
    ),
];

/// Feature names in feature vector order
pub fn feature_names() -> [&'static str; FEATURE_COUNT] {
    FEATURE_TRIPLES.map(|triple| triple.name)
}

/// Named joint angle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointAngle {
    /// Joint name (e.g., "left_knee")
    pub name: String,
    /// Angle in degrees, [0, 360)
    pub degrees: f64,
}

/// Ordered joint angles for one frame, one per feature triple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(angles: Vec<f64>) -> Self {
        Self(angles)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Pair each component with its feature name
    pub fn named(&self) -> Vec<JointAngle> {
        FEATURE_TRIPLES
            .iter()
            .zip(self.0.iter())
            .map(|(triple, &degrees)| JointAngle {
                name: triple.name.to_string(),
                degrees,
            })
            .collect()
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(angles: Vec<f64>) -> Self {
        Self::new(angles)
    }
}

impl std::ops::Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_order_is_fixed() {
        assert_eq!(
            feature_names(),
            [
                "left_elbow",
                "right_elbow",
                "left_shoulder",
                "right_shoulder",
                "left_knee",
                "right_knee"
            ]
        );
    }

    #[test]
    fn test_shoulder_triples_are_mirrored() {
        let left = FEATURE_TRIPLES[2];
        let right = FEATURE_TRIPLES[3];
        assert_eq!(left.first, BlazePoseLandmark::LeftElbow);
        assert_eq!(left.last, BlazePoseLandmark::LeftHip);
        assert_eq!(right.first, BlazePoseLandmark::RightHip);
        assert_eq!(right.last, BlazePoseLandmark::RightElbow);
    }

    #[test]
    fn test_max_index() {
        assert_eq!(FEATURE_TRIPLES[5].max_index(), 28);
        assert_eq!(AUXILIARY_TRIPLES[0].max_index(), 25);
    }

    #[test]
    fn test_named_features() {
        let features = FeatureVector::new(vec![170.0, 171.0, 20.0, 21.0, 180.0, 181.0]);
        let named = features.named();
        assert_eq!(named.len(), FEATURE_COUNT);
        assert_eq!(named[3].name, "right_shoulder");
        assert_eq!(named[3].degrees, 21.0);
    }

    #[test]
    fn test_feature_vector_serializes_as_array() {
        let features = FeatureVector::new(vec![180.0, 90.5]);
        let json = serde_json::to_string(&features).unwrap();
        assert_eq!(json, "[180.0,90.5]");
    }
}
