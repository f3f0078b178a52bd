// Library exports for the pose classifier
//
// landmarks → FeatureExtractor → FeatureVector → PoseMatcher (PoseCatalogue) → (label, MatchResult)

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{ClassifierError, Result};
