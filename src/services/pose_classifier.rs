/// Pose Classification Service
///
/// Orchestrates feature extraction and pose matching for a single frame.
/// The classifier holds no per-frame state; it borrows a frozen catalogue and
/// can be shared across threads, one `classify` call per frame.

use serde::Serialize;

use crate::error::{ClassifierError, Result};
use crate::models::joint::{FeatureVector, JointAngle};
use crate::models::landmark::Landmark;
use crate::models::pose::{MatchResult, PoseLabel};
use crate::services::feature_extractor::FeatureExtractor;
use crate::services::pose_catalogue::PoseCatalogue;
use crate::services::pose_matcher::PoseMatcher;

/// Body-landmark estimator, treated as a black box.
///
/// Returns the ordered landmarks for the single subject in `frame`, or
/// `None` when nobody was detected.
pub trait LandmarkDetector {
    type Frame;
    type Error: std::error::Error + Send + Sync + 'static;

    fn detect(&self, frame: &Self::Frame) -> std::result::Result<Option<Vec<Landmark>>, Self::Error>;
}

/// Full diagnostics for one classified frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub label: PoseLabel,
    pub result: MatchResult,
    pub features: FeatureVector,
    /// Feature angles followed by the auxiliary hip angles
    pub joint_angles: Vec<JointAngle>,
}

/// Pose classifier
#[derive(Debug, Clone)]
pub struct PoseClassifier<'c> {
    extractor: FeatureExtractor,
    matcher: PoseMatcher<'c>,
    max_distance: Option<f64>,
}

impl<'c> PoseClassifier<'c> {
    /// Create a classifier over `catalogue`
    pub fn new(catalogue: &'c PoseCatalogue) -> Self {
        tracing::info!(
            "Pose classifier ready with {} signatures",
            catalogue.len()
        );

        Self {
            extractor: FeatureExtractor::new(),
            matcher: PoseMatcher::new(catalogue),
            max_distance: None,
        }
    }

    /// Report `Unknown Pose` when the nearest signature is farther than `max_distance`.
    ///
    /// The match result still names the nearest signature.
    pub fn with_max_distance(mut self, max_distance: Option<f64>) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn catalogue(&self) -> &'c PoseCatalogue {
        self.matcher.catalogue()
    }

    /// Classify one frame of landmarks
    pub fn classify(&self, landmarks: &[Landmark]) -> Result<(PoseLabel, MatchResult)> {
        let features = self.extractor.extract(landmarks)?;
        let result = self.matcher.match_features(features.as_slice())?;
        let label = self.label_for(&result);

        tracing::debug!(
            label = %label,
            distance = result.distance,
            "Classified frame"
        );

        Ok((label, result))
    }

    /// Classify one frame and keep every intermediate value
    pub fn analyze(&self, landmarks: &[Landmark]) -> Result<Classification> {
        let features = self.extractor.extract(landmarks)?;
        let joint_angles = self.extractor.joint_angles(landmarks)?;
        let result = self.matcher.match_features(features.as_slice())?;
        let label = self.label_for(&result);

        Ok(Classification {
            label,
            result,
            features,
            joint_angles,
        })
    }

    /// Run `detector` on `frame` and classify the subject it finds
    pub fn classify_frame<D: LandmarkDetector>(
        &self,
        detector: &D,
        frame: &D::Frame,
    ) -> Result<(PoseLabel, MatchResult)> {
        let landmarks = detector
            .detect(frame)
            .map_err(|e| ClassifierError::Detection(Box::new(e)))?;

        match landmarks {
            Some(landmarks) => self.classify(&landmarks),
            None => {
                tracing::warn!("No subject detected in frame");
                Err(ClassifierError::InsufficientLandmarks {
                    required: self.extractor.required_landmarks(),
                    found: 0,
                })
            }
        }
    }

    fn label_for(&self, result: &MatchResult) -> PoseLabel {
        match self.max_distance {
            Some(limit) if result.distance > limit || result.distance.is_nan() => {
                tracing::warn!(
                    "Nearest pose {} at distance {:.2} exceeds cutoff {:.2}",
                    result.pose,
                    result.distance,
                    limit
                );
                PoseLabel::Unknown
            }
            _ => PoseLabel::Pose(result.pose.clone()),
        }
    }
}
