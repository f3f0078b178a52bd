/// Landmark models
///
/// A landmark is one body keypoint reported by the external detector for a
/// single frame. Landmarks arrive as an ordered sequence indexed by the
/// BlazePose topology.

use serde::{Deserialize, Serialize};

/// One detected body keypoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// X coordinate in pixels
    pub x: f64,
    /// Y coordinate in pixels (grows downwards)
    pub y: f64,
    /// Relative depth, same scale as x
    pub z: f64,
}

impl Landmark {
    /// Create a new landmark from pixel coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Map detector output in normalized [0, 1] coordinates to pixel space.
    ///
    /// x and y are truncated to whole pixels; depth is scaled by the image width.
    pub fn from_normalized(x: f64, y: f64, z: f64, width: u32, height: u32) -> Self {
        Self {
            x: (x * width as f64).trunc(),
            y: (y * height as f64).trunc(),
            z: z * width as f64,
        }
    }

    /// Planar distance to another landmark, ignoring depth
    pub fn distance_to(&self, other: &Landmark) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64, f64)> for Landmark {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

/// BlazePose landmark indices (33 points)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlazePoseLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

/// Number of landmarks in a complete BlazePose detection
pub const BLAZEPOSE_LANDMARK_COUNT: usize = 33;

impl BlazePoseLandmark {
    /// Position of this landmark in the detector's output sequence
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get landmark name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEye => "left_eye",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEye => "right_eye",
            Self::RightEyeOuter => "right_eye_outer",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::MouthLeft => "mouth_left",
            Self::MouthRight => "mouth_right",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftPinky => "left_pinky",
            Self::RightPinky => "right_pinky",
            Self::LeftIndex => "left_index",
            Self::RightIndex => "right_index",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }
}
