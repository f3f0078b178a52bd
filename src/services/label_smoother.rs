/// Label smoothing across frames
///
/// Frame-by-frame classification flickers when a subject sits between two
/// signatures. `LabelSmoother` is a caller-owned rolling window over recent
/// match results that reports the most frequent pose in the window. It sits
/// on top of the stateless classifier and is reset whenever the stream
/// restarts.

use std::collections::{HashMap, VecDeque};

use crate::models::pose::MatchResult;

/// Rolling majority vote over recent matches
#[derive(Debug, Clone)]
pub struct LabelSmoother {
    window_size: usize,
    history_buffer: VecDeque<String>,
}

impl LabelSmoother {
    /// Create a smoother over the last `window_size` frames (at least one)
    pub fn new(window_size: usize) -> Self {
        let window_size = window_size.max(1);
        Self {
            window_size,
            history_buffer: VecDeque::with_capacity(window_size),
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Record a frame's match and return the smoothed pose.
    ///
    /// Ties go to the pose seen most recently.
    pub fn push(&mut self, result: &MatchResult) -> &str {
        self.history_buffer.push_back(result.pose.clone());
        while self.history_buffer.len() > self.window_size {
            self.history_buffer.pop_front();
        }

        self.current().unwrap_or_default()
    }

    /// Smoothed pose for the current window, if any frame was recorded
    pub fn current(&self) -> Option<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for pose in &self.history_buffer {
            *counts.entry(pose.as_str()).or_default() += 1;
        }

        // newest first, so on equal counts the most recent pose is kept
        self.history_buffer
            .iter()
            .rev()
            .map(|pose| (pose.as_str(), counts[pose.as_str()]))
            .fold(None::<(&str, usize)>, |best, (pose, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((pose, count)),
            })
            .map(|(pose, _)| pose)
    }

    pub fn len(&self) -> usize {
        self.history_buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history_buffer.is_empty()
    }

    /// Forget all recorded frames
    pub fn reset(&mut self) {
        self.history_buffer.clear();
    }
}

impl Default for LabelSmoother {
    fn default() -> Self {
        Self::new(5)
    }
}
