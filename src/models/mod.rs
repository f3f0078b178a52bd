// Landmark, joint and pose data models

pub mod joint;
pub mod landmark;
pub mod pose;

pub use joint::*;
pub use landmark::*;
pub use pose::*;
