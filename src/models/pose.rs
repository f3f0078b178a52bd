/// Pose signatures and match results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Accepted angular range for one feature, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct AngleRange {
    pub low: f64,
    pub high: f64,
}

impl AngleRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Distance from `angle` to the nearer bound.
    ///
    /// Measured to the edge even when `angle` lies inside the range, so an
    /// angle in the middle of a wide range scores worse than one near an edge.
    pub fn edge_distance(&self, angle: f64) -> f64 {
        (angle - self.low).abs().min((angle - self.high).abs())
    }

    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.low && angle <= self.high
    }
}

impl From<(f64, f64)> for AngleRange {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

impl From<AngleRange> for (f64, f64) {
    fn from(range: AngleRange) -> Self {
        (range.low, range.high)
    }
}

/// Named reference pattern of accepted angle ranges, one per feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseSignature {
    pub name: String,
    pub ranges: Vec<AngleRange>,
}

impl PoseSignature {
    pub fn new(name: impl Into<String>, ranges: Vec<AngleRange>) -> Self {
        Self {
            name: name.into(),
            ranges,
        }
    }

    /// Whether every feature falls inside its accepted range
    pub fn accepts(&self, features: &[f64]) -> bool {
        self.ranges.len() == features.len()
            && self
                .ranges
                .iter()
                .zip(features)
                .all(|(range, &angle)| range.contains(angle))
    }
}

/// Label reported to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoseLabel {
    Pose(String),
    Unknown,
}

impl PoseLabel {
    pub fn as_str(&self) -> &str {
        match self {
            PoseLabel::Pose(name) => name,
            PoseLabel::Unknown => "Unknown Pose",
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, PoseLabel::Pose(_))
    }
}

impl fmt::Display for PoseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of matching one feature vector against the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Name of the nearest signature
    pub pose: String,
    /// Per-feature edge distances to that signature, in feature order
    pub deviations: Vec<f64>,
    /// Euclidean norm of `deviations`
    pub distance: f64,
}

impl MatchResult {
    /// Pose name followed by its per-feature deviations, as drawn on frames
    pub fn annotated_label(&self) -> String {
        let deviations = self
            .deviations
            .iter()
            .map(|d| format!("{d:.1}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} [{}]", self.pose, deviations)
    }
}
