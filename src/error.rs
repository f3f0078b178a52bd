use thiserror::Error;

/// Errors raised by the pose classification engine
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Insufficient landmarks: need at least {required}, found {found}")]
    InsufficientLandmarks { required: usize, found: usize },

    #[error("Pose catalogue is empty")]
    EmptyCatalogue,

    #[error("Pose signature not found: {0}")]
    SignatureNotFound(String),

    #[error("Feature vector has {found} components, catalogue expects {expected}")]
    FeatureLengthMismatch { expected: usize, found: usize },

    #[error("Invalid pose signature '{name}': {reason}")]
    InvalidSignature { name: String, reason: String },

    #[error("Unsupported catalogue version: {0}")]
    UnsupportedCatalogueVersion(u32),

    #[error("Failed to parse catalogue: {0}")]
    CatalogueParse(#[from] toml::de::Error),

    #[error("Failed to parse catalogue JSON: {0}")]
    CatalogueJson(#[from] serde_json::Error),

    #[error("Landmark detection failed: {0}")]
    Detection(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ClassifierError {
    /// Whether the caller can recover by skipping the current frame
    pub fn is_frame_local(&self) -> bool {
        matches!(
            self,
            ClassifierError::InsufficientLandmarks { .. } | ClassifierError::Detection(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
