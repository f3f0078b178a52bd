/// Feature Extraction Service
///
/// Turns one frame of landmarks into the ordered joint-angle feature vector
/// used for pose matching:
/// - Resolves each joint triple against the BlazePose landmark indices
/// - Delegates every triple to the angle calculator
/// - Reports the auxiliary hip angles as diagnostics

use crate::error::{ClassifierError, Result};
use crate::models::joint::{
    FeatureVector, JointAngle, JointTriple, AUXILIARY_TRIPLES, FEATURE_TRIPLES,
};
use crate::models::landmark::Landmark;
use crate::services::angle_calculator::angle_at;

/// Feature extractor over a fixed joint table
#[derive(Debug, Clone, Copy)]
pub struct FeatureExtractor {
    triples: &'static [JointTriple],
    auxiliary: &'static [JointTriple],
}

impl FeatureExtractor {
    /// Extractor over the built-in joint table
    pub fn new() -> Self {
        Self {
            triples: &FEATURE_TRIPLES,
            auxiliary: &AUXILIARY_TRIPLES,
        }
    }

    /// Feature triples in feature vector order
    pub fn triples(&self) -> &'static [JointTriple] {
        self.triples
    }

    /// Minimum landmark count needed to resolve every feature triple
    pub fn required_landmarks(&self) -> usize {
        Self::required_for(self.triples)
    }

    fn required_for(triples: &[JointTriple]) -> usize {
        triples
            .iter()
            .map(|triple| triple.max_index() + 1)
            .max()
            .unwrap_or(0)
    }

    fn ensure_landmarks(&self, landmarks: &[Landmark], triples: &[JointTriple]) -> Result<()> {
        let required = Self::required_for(triples);
        if landmarks.is_empty() || landmarks.len() < required {
            return Err(ClassifierError::InsufficientLandmarks {
                required,
                found: landmarks.len(),
            });
        }
        Ok(())
    }

    fn angle_for(triple: &JointTriple, landmarks: &[Landmark]) -> f64 {
        angle_at(
            &landmarks[triple.first.index()],
            &landmarks[triple.vertex.index()],
            &landmarks[triple.last.index()],
        )
    }

    /// Extract the feature vector for one frame
    pub fn extract(&self, landmarks: &[Landmark]) -> Result<FeatureVector> {
        self.ensure_landmarks(landmarks, self.triples)?;

        let angles = self
            .triples
            .iter()
            .map(|triple| Self::angle_for(triple, landmarks))
            .collect();

        Ok(FeatureVector::new(angles))
    }

    /// All named joint angles: the features in order, then the auxiliary angles
    pub fn joint_angles(&self, landmarks: &[Landmark]) -> Result<Vec<JointAngle>> {
        self.ensure_landmarks(landmarks, self.triples)?;
        self.ensure_landmarks(landmarks, self.auxiliary)?;

        Ok(self
            .triples
            .iter()
            .chain(self.auxiliary.iter())
            .map(|triple| JointAngle {
                name: triple.name.to_string(),
                degrees: Self::angle_for(triple, landmarks),
            })
            .collect())
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}
