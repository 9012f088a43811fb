use crate::library::logger::interface::Logger;
use crate::video_source::interface::{Frame, VideoSource};
use std::collections::VecDeque;
use std::sync::Arc;

// Wired in by tests and by builds without the vision feature.
#[allow(dead_code)]
pub struct FakeVideoSource {
    frames: VecDeque<Frame>,
    released: bool,
    logger: Arc<dyn Logger + Send + Sync>,
}

#[allow(dead_code)]
impl FakeVideoSource {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, frame_count: usize) -> Self {
        let frames = (0..frame_count)
            .map(|index| Frame {
                width: 64,
                height: 64,
                data: vec![(index % 256) as u8; 64 * 64],
            })
            .collect();

        Self {
            frames,
            released: false,
            logger: logger.with_namespace("video_source").with_namespace("fake"),
        }
    }
}

impl VideoSource for FakeVideoSource {
    fn next_frame(&mut self) -> Option<Frame> {
        if self.released {
            return None;
        }

        let frame = self.frames.pop_front()?;
        let _ = self.logger.info(&format!(
            "Serving synthetic {}x{} frame",
            frame.width, frame.height
        ));
        Some(frame)
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.frames.clear();
        let _ = self.logger.info("Synthetic stream released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::library::logger::impl_console::LoggerConsole;

    fn fake_source(frame_count: usize) -> FakeVideoSource {
        let config = Config::default();
        let logger: Arc<dyn Logger + Send + Sync> =
            Arc::new(LoggerConsole::new(config.logger_timezone));
        FakeVideoSource::new(logger, frame_count)
    }

    #[test]
    fn serves_frames_in_order_then_ends() {
        let mut source = fake_source(2);

        assert!(source.next_frame().is_some());
        assert!(source.next_frame().is_some());
        assert!(source.next_frame().is_none());
        assert!(source.next_frame().is_none());
    }

    #[test]
    fn release_is_idempotent_and_ends_the_stream() {
        let mut source = fake_source(3);

        assert!(source.next_frame().is_some());
        source.release();
        source.release();
        assert!(source.next_frame().is_none());
    }
}
