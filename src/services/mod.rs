// Pose classification services

pub mod angle_calculator;
pub mod feature_extractor;
pub mod label_smoother;
pub mod pose_catalogue;
pub mod pose_classifier;
pub mod pose_matcher;

pub use angle_calculator::angle_at;
pub use feature_extractor::FeatureExtractor;
pub use label_smoother::LabelSmoother;
pub use pose_catalogue::{PoseCatalogue, CATALOGUE_VERSION};
pub use pose_classifier::{Classification, LandmarkDetector, PoseClassifier};
pub use pose_matcher::PoseMatcher;
