use crate::library::logger::interface::Logger;
use crate::video_source::interface::{Frame, VideoError, VideoSource};
use opencv::core::{AlgorithmHint, Mat};
use opencv::prelude::*;
use opencv::{imgproc, videoio};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct OpencvVideoSource {
    capture: videoio::VideoCapture,
    path: PathBuf,
    released: bool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl OpencvVideoSource {
    pub fn open(path: &Path, logger: Arc<dyn Logger + Send + Sync>) -> Result<Self, VideoError> {
        let logger = logger.with_namespace("video_source").with_namespace("opencv");

        let source = path.to_string_lossy();
        let capture = videoio::VideoCapture::from_file(&source, videoio::CAP_ANY)
            .map_err(|_| VideoError::CannotOpen(path.to_path_buf()))?;
        let opened = capture
            .is_opened()
            .map_err(|_| VideoError::CannotOpen(path.to_path_buf()))?;
        if !opened {
            return Err(VideoError::CannotOpen(path.to_path_buf()));
        }

        let _ = logger.info(&format!("Opened {}", path.display()));

        Ok(Self {
            capture,
            path: path.to_path_buf(),
            released: false,
            logger,
        })
    }

    fn read_gray_frame(&mut self) -> opencv::Result<Option<Frame>> {
        let mut bgr = Mat::default();
        if !self.capture.read(&mut bgr)? || bgr.empty() {
            return Ok(None);
        }

        let mut gray = Mat::default();
        imgproc::cvt_color(
            &bgr,
            &mut gray,
            imgproc::COLOR_BGR2GRAY,
            0,
            AlgorithmHint::ALGO_HINT_DEFAULT,
        )?;

        Ok(Some(Frame {
            width: gray.cols() as u32,
            height: gray.rows() as u32,
            data: gray.data_bytes()?.to_vec(),
        }))
    }
}

impl VideoSource for OpencvVideoSource {
    fn next_frame(&mut self) -> Option<Frame> {
        if self.released {
            return None;
        }

        match self.read_gray_frame() {
            Ok(frame) => frame,
            Err(error) => {
                // A decode failure mid-stream terminates the scan, same as end of stream.
                let _ = self
                    .logger
                    .error(&format!("Frame decode failed, ending stream: {}", error));
                None
            }
        }
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let _ = self.capture.release();
        let _ = self.logger.info(&format!("Released {}", self.path.display()));
    }
}

impl Drop for OpencvVideoSource {
    fn drop(&mut self) {
        self.release();
    }
}
