use crate::config::Config;
use crate::gaze_estimator::impl_fake::FakeGazeEstimator;
use crate::gaze_estimator::interface::GazePredicates;
use crate::library::logger::impl_console::LoggerConsole;
use crate::library::logger::interface::Logger;
use crate::proctor::scan::Proctor;
use crate::video_source::impl_fake::FakeVideoSource;
use std::sync::Arc;

pub struct Fixture {
    pub config: Config,
    pub source: FakeVideoSource,
    pub proctor: Proctor,
}

impl Fixture {
    pub fn scripted(script: Vec<GazePredicates>) -> Self {
        let config = Config::default();
        let logger: Arc<dyn Logger + Send + Sync> =
            Arc::new(LoggerConsole::new(config.logger_timezone));
        let source = FakeVideoSource::new(logger.clone(), script.len());
        let proctor = Proctor::new(logger, Box::new(FakeGazeEstimator::scripted(script)));

        Self {
            config,
            source,
            proctor,
        }
    }

    pub fn unscripted(frame_count: usize) -> Self {
        let config = Config::default();
        let logger: Arc<dyn Logger + Send + Sync> =
            Arc::new(LoggerConsole::new(config.logger_timezone));
        let source = FakeVideoSource::new(logger.clone(), frame_count);
        let proctor = Proctor::new(logger, Box::new(FakeGazeEstimator::new()));

        Self {
            config,
            source,
            proctor,
        }
    }
}

pub fn blink() -> GazePredicates {
    GazePredicates {
        blinking: true,
        ..GazePredicates::default()
    }
}

pub fn left() -> GazePredicates {
    GazePredicates {
        looking_left: true,
        ..GazePredicates::default()
    }
}

pub fn right() -> GazePredicates {
    GazePredicates {
        looking_right: true,
        ..GazePredicates::default()
    }
}

pub fn center() -> GazePredicates {
    GazePredicates {
        looking_center: true,
        ..GazePredicates::default()
    }
}

pub fn none() -> GazePredicates {
    GazePredicates::default()
}
