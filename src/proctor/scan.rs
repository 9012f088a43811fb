use crate::gaze_estimator::interface::GazeEstimator;
use crate::library::logger::interface::Logger;
use crate::proctor::core::{classify_gaze, Tally};
use crate::video_source::interface::VideoSource;
use std::sync::Arc;

pub struct Proctor {
    gaze_estimator: Box<dyn GazeEstimator>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl Proctor {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        gaze_estimator: Box<dyn GazeEstimator>,
    ) -> Self {
        Self {
            gaze_estimator,
            logger: logger.with_namespace("proctor"),
        }
    }

    /// One sequential pass over the stream. End of stream is normal
    /// termination, including the zero-frame case.
    pub fn scan(&mut self, source: &mut dyn VideoSource) -> Tally {
        let mut tally = Tally::new();

        while let Some(frame) = source.next_frame() {
            let predicates = self.gaze_estimator.estimate(&frame);
            let label = classify_gaze(&predicates);
            tally.record(label);
        }

        source.release();

        let _ = self.logger.info(&format!(
            "Scan finished: {} frames, {} cheating, {} clean, {} unknown",
            tally.total_frames, tally.cheating, tally.no_cheating, tally.unknown
        ));

        tally
    }
}
