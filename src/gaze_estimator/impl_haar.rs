use crate::gaze_estimator::interface::{GazeEstimator, GazePredicates};
use crate::library::logger::interface::Logger;
use crate::video_source::interface::Frame;
use anyhow::{anyhow, Context, Result};
use opencv::core::{Mat, Rect, Size, Vector};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;
use std::sync::Arc;

const FACE_CASCADE_PATH: &str =
    "/usr/share/opencv4/haarcascades/haarcascade_frontalface_default.xml";
const EYE_CASCADE_PATH: &str = "/usr/share/opencv4/haarcascades/haarcascade_eye.xml";

// Horizontal pupil ratio in mirrored camera view: low = looking right, high = looking left.
const RIGHT_MAX_RATIO: f64 = 0.40;
const LEFT_MIN_RATIO: f64 = 0.60;

pub struct HaarGazeEstimator {
    face_cascade: CascadeClassifier,
    eye_cascade: CascadeClassifier,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl HaarGazeEstimator {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Result<Self> {
        let face_cascade = CascadeClassifier::new(FACE_CASCADE_PATH)
            .with_context(|| format!("failed to load face cascade {}", FACE_CASCADE_PATH))?;
        let eye_cascade = CascadeClassifier::new(EYE_CASCADE_PATH)
            .with_context(|| format!("failed to load eye cascade {}", EYE_CASCADE_PATH))?;

        if face_cascade.empty().unwrap_or(true) || eye_cascade.empty().unwrap_or(true) {
            return Err(anyhow!("haar cascade files are missing or empty"));
        }

        Ok(Self {
            face_cascade,
            eye_cascade,
            logger: logger.with_namespace("gaze_estimator").with_namespace("haar"),
        })
    }

    fn detect(&mut self, frame: &Frame) -> opencv::Result<GazePredicates> {
        let gray = Mat::from_slice(&frame.data)?
            .reshape(1, frame.height as i32)?
            .try_clone()?;

        let mut faces = Vector::<Rect>::new();
        self.face_cascade.detect_multi_scale(
            &gray,
            &mut faces,
            1.1,
            5,
            0,
            Size::new(60, 60),
            Size::default(),
        )?;

        let face = match largest_rect(&faces) {
            Some(face) => face,
            None => return Ok(GazePredicates::default()),
        };

        let face_roi = Mat::roi(&gray, face)?.try_clone()?;
        let mut eyes = Vector::<Rect>::new();
        self.eye_cascade.detect_multi_scale(
            &face_roi,
            &mut eyes,
            1.1,
            5,
            0,
            Size::new(20, 20),
            Size::default(),
        )?;

        // Open eyes sit in the upper half of the face box; anything lower is a false hit.
        let ratios: Vec<f64> = eyes
            .iter()
            .filter(|eye| eye.y + eye.height / 2 < face.height / 2)
            .filter_map(|eye| {
                pupil_ratio(
                    frame,
                    Rect::new(face.x + eye.x, face.y + eye.y, eye.width, eye.height),
                )
            })
            .collect();

        if ratios.is_empty() {
            // A face without open eyes reads as a blink.
            return Ok(GazePredicates {
                blinking: true,
                ..GazePredicates::default()
            });
        }

        let ratio = ratios.iter().sum::<f64>() / ratios.len() as f64;
        let mut predicates = GazePredicates::default();
        if ratio <= RIGHT_MAX_RATIO {
            predicates.looking_right = true;
        } else if ratio >= LEFT_MIN_RATIO {
            predicates.looking_left = true;
        } else {
            predicates.looking_center = true;
        }
        Ok(predicates)
    }
}

impl GazeEstimator for HaarGazeEstimator {
    fn estimate(&mut self, frame: &Frame) -> GazePredicates {
        match self.detect(frame) {
            Ok(predicates) => predicates,
            Err(error) => {
                let _ = self
                    .logger
                    .error(&format!("Detection failed, no predicate fired: {}", error));
                GazePredicates::default()
            }
        }
    }
}

fn largest_rect(rects: &Vector<Rect>) -> Option<Rect> {
    rects.iter().max_by_key(|rect| rect.width * rect.height)
}

// Centroid of dark pixels inside the eye rect, as a 0..1 horizontal position.
fn pupil_ratio(frame: &Frame, region: Rect) -> Option<f64> {
    let width = frame.width as i32;
    let height = frame.height as i32;
    let x0 = region.x.max(0);
    let y0 = region.y.max(0);
    let x1 = (region.x + region.width).min(width);
    let y1 = (region.y + region.height).min(height);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }

    let mut total_weight = 0.0;
    let mut weighted_x = 0.0;
    for y in y0..y1 {
        let row = &frame.data[(y * width) as usize..((y + 1) * width) as usize];
        for x in x0..x1 {
            let darkness = f64::from(255 - row[x as usize]);
            total_weight += darkness;
            weighted_x += darkness * f64::from(x - x0);
        }
    }
    if total_weight == 0.0 {
        return None;
    }

    let span = f64::from((x1 - x0 - 1).max(1));
    Some(weighted_x / total_weight / span)
}
