//! End-to-end export of the loader animation

use crate::config::LoaderConfig;
use crate::engine::SequenceReport;
use crate::gen::{CardiacWaveform, Curve, PhaseSchedule, TimeAxis};
use std::path::PathBuf;

/// Build the time axis and evaluate the waveform over it
pub fn generate_curve(config: &LoaderConfig) -> Curve {
    let axis = TimeAxis::linspace(0.0, config.duration_secs, config.sample_count);
    let waveform = CardiacWaveform::new(
        config.cycle_length,
        config.baseline_offset,
        PhaseSchedule::standard(),
    );
    waveform.generate(&axis)
}

/// What a finished export produced
#[derive(Clone, Debug, PartialEq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub duration_secs: f64,
    pub fps: u32,
    pub report: SequenceReport,
}

/// Render every frame into the configured GIF.
///
/// Either the whole animation lands at `config.output_path` or an error is
/// returned and no file is left there.
#[cfg(feature = "gif")]
pub fn export(config: &LoaderConfig) -> anyhow::Result<ExportSummary> {
    use crate::engine::FrameSequencer;
    use crate::platform::GifOutput;
    use anyhow::Context;

    config.validate()?;
    PhaseSchedule::standard()
        .validate()
        .context("Invalid phase schedule")?;

    let curve = generate_curve(config);
    log::debug!("Generated {} curve points", curve.len());

    let sequencer = FrameSequencer::new(config.duration_secs, config.fps);
    let mut output = GifOutput::create(&config.output_path, config.style, config.fps)?;
    let report = sequencer.run(&curve, &mut output)?;
    let path = output.finish()?;

    Ok(ExportSummary {
        path,
        duration_secs: config.duration_secs,
        fps: config.fps,
        report,
    })
}
