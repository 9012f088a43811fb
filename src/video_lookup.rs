use crate::config::Config;
use crate::video_source::interface::VideoError;
use std::path::{Path, PathBuf};

pub fn resolve_video_path(
    requested: Option<PathBuf>,
    config: &Config,
) -> Result<PathBuf, VideoError> {
    let path = match requested {
        Some(path) => path,
        None => first_video_in_dir(&config.demo_dir, &config.video_extensions)?,
    };

    if !path.is_file() {
        return Err(VideoError::FileNotFound(path));
    }
    Ok(path)
}

fn first_video_in_dir(dir: &Path, extensions: &[String]) -> Result<PathBuf, VideoError> {
    let entries =
        std::fs::read_dir(dir).map_err(|_| VideoError::NoVideoFound(dir.to_path_buf()))?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_supported_video(path, extensions))
        .collect();

    // Directory iteration order is platform-dependent; sort so discovery is deterministic.
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| VideoError::NoVideoFound(dir.to_path_buf()))
}

fn is_supported_video(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            extensions
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(extension))
        })
        .unwrap_or(false)
}
