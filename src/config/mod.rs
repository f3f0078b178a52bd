pub mod app;

pub use app::ClassifierConfig;
