use crate::gen::Curve;
use crate::platform::FrameSink;
use anyhow::Context;

/// Summary of one pass over all frames
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceReport {
    /// Number of frames handed to the sink
    pub frames_written: usize,
    /// Points visible in the last frame
    pub final_prefix_len: usize,
    /// Points in the full curve
    pub curve_len: usize,
}

/// Progressive-reveal frame driver.
///
/// Each frame shows a longer prefix of a precomputed curve. Frames are emitted
/// strictly in index order; looping back to the empty curve is left to the
/// player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSequencer {
    duration_secs: f64,
    fps: u32,
    total_frames: usize,
}

impl FrameSequencer {
    /// Create a new sequencer
    /// - duration_secs: Length of one reveal pass
    /// - fps: Frames per second
    pub fn new(duration_secs: f64, fps: u32) -> Self {
        Self {
            duration_secs,
            fps,
            total_frames: Self::calculate_total_frames(duration_secs, fps),
        }
    }

    fn calculate_total_frames(duration_secs: f64, fps: u32) -> usize {
        let frames = (duration_secs * fps as f64).floor();
        if frames.is_finite() && frames > 0.0 {
            frames as usize
        } else {
            0
        }
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// `floor(duration * fps)`
    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    /// Display time of a single frame in milliseconds
    pub fn frame_interval_ms(&self) -> f64 {
        if self.fps == 0 {
            return 0.0;
        }
        1000.0 / self.fps as f64
    }

    /// Fraction of the pass completed at `frame`, in `[0, 1)` for valid frames
    pub fn progress(&self, frame: usize) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        frame as f64 / self.total_frames as f64
    }

    /// Number of curve points visible at `frame` for a curve of `curve_len` points.
    ///
    /// The last frame stays strictly below `curve_len`; the pass never shows the
    /// finished curve before the loop restarts.
    pub fn prefix_len(&self, frame: usize, curve_len: usize) -> usize {
        let len = (self.progress(frame) * curve_len as f64).floor() as usize;
        len.min(curve_len)
    }

    /// Hand every frame's visible prefix to `sink`, in order.
    ///
    /// Stops at the first sink error; nothing is retried.
    pub fn run<S: FrameSink + ?Sized>(
        &self,
        curve: &Curve,
        sink: &mut S,
    ) -> anyhow::Result<SequenceReport> {
        log::info!(
            "Sequencing {} frames at {} fps over {} curve points",
            self.total_frames,
            self.fps,
            curve.len()
        );

        let mut final_prefix_len = 0;
        for frame in 0..self.total_frames {
            let len = self.prefix_len(frame, curve.len());
            log::trace!("frame {}: {} points", frame, len);

            sink.write_frame(frame, curve.prefix(len))
                .with_context(|| format!("Failed to write frame {}", frame))?;
            final_prefix_len = len;

            if (frame + 1) % self.fps.max(1) as usize == 0 {
                log::debug!("{}/{} frames written", frame + 1, self.total_frames);
            }
        }

        Ok(SequenceReport {
            frames_written: self.total_frames,
            final_prefix_len,
            curve_len: curve.len(),
        })
    }
}
