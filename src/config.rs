use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub demo_dir: PathBuf,
    pub video_extensions: Vec<String>,
    pub output_filename: String,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo_dir: PathBuf::from("video_demo"),
            video_extensions: ["mp4", "webm", "avi", "mov", "mkv"]
                .iter()
                .map(|extension| extension.to_string())
                .collect(),
            output_filename: "hasil_gaze.json".to_string(),
            logger_timezone: western_indonesia_time(),
        }
    }
}

fn western_indonesia_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(7 * 3600).unwrap()
}
