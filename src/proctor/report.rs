use crate::proctor::core::Tally;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub video: String,
    pub total_frames: u64,
    pub total_cheating: u64,
    pub total_tidak_cheating: u64,
    pub total_unknown: u64,
    pub cheating_detected: bool,
}

impl Report {
    pub fn new(video: &Path, tally: &Tally) -> Self {
        Self {
            video: video.display().to_string(),
            total_frames: tally.total_frames,
            total_cheating: tally.cheating,
            total_tidak_cheating: tally.no_cheating,
            total_unknown: tally.unknown,
            cheating_detected: tally.cheating_detected(),
        }
    }

    pub fn write_json(&self, path: &Path) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}
