pub mod sequencer;
pub use sequencer::{FrameSequencer, SequenceReport};
