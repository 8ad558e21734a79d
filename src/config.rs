use crate::engine::FrameSequencer;
use crate::gen::cardiac::{DEFAULT_BASELINE_OFFSET, DEFAULT_CYCLE_LENGTH};
use crate::visualization::PlotStyle;
use std::path::PathBuf;

/// Fixed parameters of the loader animation
#[derive(Clone, Debug, PartialEq)]
pub struct LoaderConfig {
    /// Length of one reveal pass, which is also the time span of the curve
    pub duration_secs: f64,
    pub fps: u32,
    /// Curve points over the whole pass, oversampled against the canvas width
    pub sample_count: usize,
    /// Time per heartbeat
    pub cycle_length: f64,
    pub baseline_offset: f64,
    pub style: PlotStyle,
    pub output_path: PathBuf,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            duration_secs: 10.0,
            fps: 30,
            sample_count: 1500,
            cycle_length: DEFAULT_CYCLE_LENGTH,
            baseline_offset: DEFAULT_BASELINE_OFFSET,
            style: PlotStyle::default(),
            output_path: PathBuf::from("ecg_loader.gif"),
        }
    }
}

impl LoaderConfig {
    pub fn with_timing(mut self, duration_secs: f64, fps: u32) -> Self {
        self.duration_secs = duration_secs;
        self.fps = fps;
        self
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Reject settings that cannot produce an animation
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.duration_secs.is_finite() && self.duration_secs > 0.0,
            "Duration must be positive, got {}",
            self.duration_secs
        );
        anyhow::ensure!(self.fps > 0, "Frame rate must be positive");
        anyhow::ensure!(
            FrameSequencer::new(self.duration_secs, self.fps).total_frames() > 0,
            "{} s at {} fps is shorter than one frame",
            self.duration_secs,
            self.fps
        );
        anyhow::ensure!(self.sample_count > 0, "Sample count must be positive");
        anyhow::ensure!(
            self.cycle_length.is_finite() && self.cycle_length > 0.0,
            "Cycle length must be positive, got {}",
            self.cycle_length
        );
        self.style.validate()
    }
}
