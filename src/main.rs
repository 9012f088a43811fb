use crate::config::Config;
use crate::gaze_estimator::interface::GazeEstimator;
use crate::library::logger::impl_console::LoggerConsole;
use crate::library::logger::interface::Logger;
use crate::proctor::report::Report;
use crate::proctor::scan::Proctor;
use crate::video_source::interface::VideoSource;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod config;
mod gaze_estimator;
mod library;
mod proctor;
mod video_lookup;
mod video_source;

#[derive(Parser, Debug)]
#[command(
    name = "gaze-proctor",
    about = "Frame-by-frame gaze review for recorded exam sessions"
)]
struct Args {
    /// Video file to analyze; defaults to the first supported file in the demo directory
    #[arg(long, value_name = "PATH")]
    video: Option<PathBuf>,

    /// Where to write the JSON summary
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::default();
    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    run(args, config, logger)
}

fn run(args: Args, config: Config, logger: Arc<dyn Logger + Send + Sync>) -> Result<()> {
    let video_path = video_lookup::resolve_video_path(args.video, &config)?;
    let video_path = std::fs::canonicalize(&video_path)
        .with_context(|| format!("failed to resolve {}", video_path.display()))?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_filename));

    let mut source = open_video(&video_path, logger.clone())?;
    let mut proctor = Proctor::new(logger.clone(), build_estimator(logger.clone())?);

    let tally = proctor.scan(source.as_mut());

    let report = Report::new(&video_path, &tally);
    report
        .write_json(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let _ = logger.info(&format!(
        "Verdict: cheating_detected = {}",
        report.cheating_detected
    ));
    println!("Report saved to {}", output.display());
    Ok(())
}

#[cfg(feature = "vision")]
fn open_video(path: &Path, logger: Arc<dyn Logger + Send + Sync>) -> Result<Box<dyn VideoSource>> {
    let source = video_source::impl_opencv::OpencvVideoSource::open(path, logger)?;
    Ok(Box::new(source))
}

#[cfg(not(feature = "vision"))]
fn open_video(path: &Path, logger: Arc<dyn Logger + Send + Sync>) -> Result<Box<dyn VideoSource>> {
    use crate::video_source::interface::VideoError;

    let _ = logger.error("built without the vision feature, cannot decode video");
    Err(VideoError::CannotOpen(path.to_path_buf()).into())
}

#[cfg(feature = "vision")]
fn build_estimator(logger: Arc<dyn Logger + Send + Sync>) -> Result<Box<dyn GazeEstimator>> {
    let estimator = gaze_estimator::impl_haar::HaarGazeEstimator::new(logger)?;
    Ok(Box::new(estimator))
}

#[cfg(not(feature = "vision"))]
fn build_estimator(_logger: Arc<dyn Logger + Send + Sync>) -> Result<Box<dyn GazeEstimator>> {
    Ok(Box::new(
        gaze_estimator::impl_fake::FakeGazeEstimator::new(),
    ))
}
