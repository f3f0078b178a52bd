/// Pose Matching Service
///
/// Nearest-signature matching over the pose catalogue:
/// - Per-feature edge distance to each signature's accepted range
/// - Euclidean aggregation of the edge distances
/// - First-seen wins on ties, so catalogue order is significant
///
/// There is no rejection threshold: the nearest signature is always returned
/// and callers that need a cutoff apply it to `MatchResult::distance`.

use crate::error::{ClassifierError, Result};
use crate::models::pose::{MatchResult, PoseSignature};
use crate::services::pose_catalogue::PoseCatalogue;

/// Matcher bound to a frozen catalogue
#[derive(Debug, Clone, Copy)]
pub struct PoseMatcher<'c> {
    catalogue: &'c PoseCatalogue,
}

impl<'c> PoseMatcher<'c> {
    pub fn new(catalogue: &'c PoseCatalogue) -> Self {
        Self { catalogue }
    }

    pub fn catalogue(&self) -> &'c PoseCatalogue {
        self.catalogue
    }

    /// Per-feature edge distances from `features` to `signature`
    pub fn deviations(features: &[f64], signature: &PoseSignature) -> Result<Vec<f64>> {
        if features.len() != signature.ranges.len() {
            return Err(ClassifierError::FeatureLengthMismatch {
                expected: signature.ranges.len(),
                found: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(&signature.ranges)
            .map(|(&angle, range)| range.edge_distance(angle))
            .collect())
    }

    /// Euclidean norm of a deviation vector
    pub fn aggregate(deviations: &[f64]) -> f64 {
        deviations.iter().map(|d| d * d).sum::<f64>().sqrt()
    }

    /// Find the catalogue signature nearest to `features`
    pub fn match_features(&self, features: &[f64]) -> Result<MatchResult> {
        let mut best: Option<MatchResult> = None;

        for (name, signature) in self.catalogue.all_signatures() {
            let deviations = Self::deviations(features, signature)?;
            let distance = Self::aggregate(&deviations);

            tracing::trace!(pose = name, distance, "Scored pose signature");

            let improves = best
                .as_ref()
                .map_or(true, |current| distance < current.distance);
            if improves {
                best = Some(MatchResult {
                    pose: name.to_string(),
                    deviations,
                    distance,
                });
            }
        }

        best.ok_or(ClassifierError::EmptyCatalogue)
    }
}
