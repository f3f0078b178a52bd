/// Pose Catalogue
///
/// Read-only registry of named pose signatures. The built-in table is
/// materialized once per process; alternative tables can be loaded from a
/// versioned TOML or JSON document at startup. Iteration order is the table
/// order and decides ties during matching.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{ClassifierError, Result};
use crate::models::joint::{FEATURE_COUNT, JOINT_TABLE_VERSION};
use crate::models::pose::{AngleRange, PoseSignature};

/// Catalogue document version this build understands
pub const CATALOGUE_VERSION: u32 = JOINT_TABLE_VERSION;

type SignatureRow = (&'static str, [(f64, f64); FEATURE_COUNT]);

/// Built-in signatures, columns in feature order:
/// left elbow, right elbow, left shoulder, right shoulder, left knee, right knee
const BUILTIN_SIGNATURES: [SignatureRow; 8] = [
    (
        "Butterfly Pose",
        [(160.0, 200.0), (160.0, 200.0), (0.0, 30.0), (0.0, 30.0), (0.0, 20.0), (0.0, 20.0)],
    ),
    (
        "Standing Pose",
        [(160.0, 200.0), (160.0, 200.0), (0.0, 30.0), (0.0, 30.0), (160.0, 200.0), (160.0, 200.0)],
    ),
    (
        "Staff Pose",
        [(160.0, 200.0), (160.0, 200.0), (160.0, 200.0), (160.0, 200.0), (160.0, 200.0), (160.0, 200.0)],
    ),
    (
        "Mountain Pose",
        [(160.0, 200.0), (160.0, 200.0), (160.0, 200.0), (160.0, 200.0), (160.0, 200.0), (160.0, 200.0)],
    ),
    (
        "Squat",
        [(160.0, 200.0), (160.0, 200.0), (80.0, 130.0), (80.0, 130.0), (40.0, 80.0), (40.0, 80.0)],
    ),
    (
        "Warrior II Pose",
        [(165.0, 195.0), (165.0, 195.0), (80.0, 110.0), (80.0, 110.0), (165.0, 195.0), (90.0, 120.0)],
    ),
    (
        "T Pose",
        [(165.0, 195.0), (165.0, 195.0), (80.0, 110.0), (80.0, 110.0), (160.0, 195.0), (160.0, 195.0)],
    ),
    (
        "Tree Pose",
        [(165.0, 195.0), (165.0, 195.0), (80.0, 110.0), (80.0, 110.0), (165.0, 195.0), (25.0, 45.0)],
    ),
];

static BUILTIN: Lazy<PoseCatalogue> = Lazy::new(|| {
    let signatures = BUILTIN_SIGNATURES
        .iter()
        .map(|(name, ranges)| {
            PoseSignature::new(*name, ranges.iter().copied().map(AngleRange::from).collect())
        })
        .collect::<Vec<_>>();

    tracing::info!(
        "Initialized built-in pose catalogue v{} with {} signatures",
        CATALOGUE_VERSION,
        signatures.len()
    );

    PoseCatalogue { signatures }
});

/// On-disk catalogue document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogueDocument {
    version: u32,
    #[serde(default, rename = "pose")]
    poses: Vec<PoseSignature>,
}

/// Ordered, immutable set of pose signatures
#[derive(Debug, Clone, PartialEq)]
pub struct PoseCatalogue {
    signatures: Vec<PoseSignature>,
}

impl PoseCatalogue {
    /// Process-wide built-in catalogue
    pub fn builtin() -> &'static PoseCatalogue {
        &BUILTIN
    }

    /// Build a catalogue from signatures, validating each one
    pub fn new(signatures: Vec<PoseSignature>) -> Result<Self> {
        let mut seen = HashSet::new();
        for signature in &signatures {
            validate_signature(signature)?;
            if !seen.insert(signature.name.as_str()) {
                return Err(ClassifierError::InvalidSignature {
                    name: signature.name.clone(),
                    reason: "duplicate pose name".to_string(),
                });
            }
        }

        Ok(Self { signatures })
    }

    /// Parse a versioned TOML catalogue
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let document: CatalogueDocument = toml::from_str(contents)?;
        Self::from_document(document)
    }

    /// Parse a versioned JSON catalogue
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let document: CatalogueDocument = serde_json::from_str(contents)?;
        Self::from_document(document)
    }

    fn from_document(document: CatalogueDocument) -> Result<Self> {
        if document.version != CATALOGUE_VERSION {
            return Err(ClassifierError::UnsupportedCatalogueVersion(document.version));
        }

        let catalogue = Self::new(document.poses)?;
        tracing::info!(
            "Loaded pose catalogue v{} with {} signatures",
            document.version,
            catalogue.len()
        );
        Ok(catalogue)
    }

    /// Serialize as a versioned TOML document
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(&CatalogueDocument {
            version: CATALOGUE_VERSION,
            poses: self.signatures.clone(),
        })
    }

    /// All signatures in iteration order
    pub fn all_signatures(&self) -> impl Iterator<Item = (&str, &PoseSignature)> {
        self.signatures
            .iter()
            .map(|signature| (signature.name.as_str(), signature))
    }

    /// Look up a signature by pose name
    pub fn signature_for(&self, name: &str) -> Result<&PoseSignature> {
        self.signatures
            .iter()
            .find(|signature| signature.name == name)
            .ok_or_else(|| ClassifierError::SignatureNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

fn validate_signature(signature: &PoseSignature) -> Result<()> {
    let invalid = |reason: String| ClassifierError::InvalidSignature {
        name: signature.name.clone(),
        reason,
    };

    if signature.name.trim().is_empty() {
        return Err(invalid("pose name is empty".to_string()));
    }

    if signature.ranges.len() != FEATURE_COUNT {
        return Err(invalid(format!(
            "expected {} ranges, found {}",
            FEATURE_COUNT,
            signature.ranges.len()
        )));
    }

    for (idx, range) in signature.ranges.iter().enumerate() {
        if !(0.0..=360.0).contains(&range.low)
            || !(0.0..=360.0).contains(&range.high)
            || range.low > range.high
        {
            return Err(invalid(format!(
                "range {} ({}, {}) must satisfy 0 <= low <= high <= 360",
                idx, range.low, range.high
            )));
        }
    }

    Ok(())
}
