use crate::gaze_estimator::interface::{GazeEstimator, GazePredicates};
use crate::video_source::interface::Frame;
use rand::Rng;
use std::collections::VecDeque;

#[allow(dead_code)]
pub struct FakeGazeEstimator {
    script: VecDeque<GazePredicates>,
}

#[allow(dead_code)]
impl FakeGazeEstimator {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
        }
    }

    pub fn scripted(script: Vec<GazePredicates>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl GazeEstimator for FakeGazeEstimator {
    fn estimate(&mut self, _frame: &Frame) -> GazePredicates {
        if let Some(next) = self.script.pop_front() {
            return next;
        }

        // Unscripted frames draw one eye state at random
        let mut rng = rand::rng();
        match rng.random_range(0..4) {
            0 => GazePredicates {
                blinking: true,
                ..GazePredicates::default()
            },
            1 => GazePredicates {
                looking_left: true,
                ..GazePredicates::default()
            },
            2 => GazePredicates {
                looking_right: true,
                ..GazePredicates::default()
            },
            _ => GazePredicates {
                looking_center: true,
                ..GazePredicates::default()
            },
        }
    }
}
