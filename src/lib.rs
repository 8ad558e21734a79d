//! Procedural ECG loader animation: waveform synthesis, progressive-reveal
//! frame sequencing and GIF export

pub mod animation;
pub mod config;
pub mod engine;
pub mod gen;
pub mod platform;
pub mod utils;
pub mod visualization;

pub use config::LoaderConfig;
