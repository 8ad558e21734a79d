/// Output abstraction for rendered frames
/// The sequencer only knows this trait, so the GIF encoder can be swapped for
/// another container or an in-memory recorder.

use crate::gen::CurveSlice;

/// Trait for anything that turns per-frame curve data into output frames
pub trait FrameSink {
    /// Render and append one frame. Frames arrive in index order, starting at 0.
    fn write_frame(&mut self, index: usize, curve: CurveSlice<'_>) -> Result<(), anyhow::Error>;

    /// Number of frames accepted so far
    fn frames_written(&self) -> usize;
}

// Platform-specific implementations
#[cfg(feature = "gif")]
pub mod gif_output;

// Re-export platform-specific types
#[cfg(feature = "gif")]
pub use self::gif_output::GifOutput;
