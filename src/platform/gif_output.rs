use super::FrameSink;
use crate::gen::CurveSlice;
use crate::visualization::{PlotCanvas, PlotStyle};
use anyhow::{anyhow, Context};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Last byte of every complete GIF stream
const GIF_TRAILER: u8 = 0x3B;

/// Quantizer speed handed to the GIF encoder (1 = best, 30 = fastest)
const QUANTIZER_SPEED: i32 = 10;

/// Looping animated GIF written frame by frame.
///
/// Frames go to `<path>.partial`; [`GifOutput::finish`] moves the file into
/// place. Dropping the output unfinished deletes the partial file, so a failed
/// run never leaves a truncated animation at `path`.
pub struct GifOutput {
    encoder: Option<GifEncoder<File>>,
    file: File,
    canvas: PlotCanvas,
    delay: Delay,
    path: PathBuf,
    partial_path: PathBuf,
    frames_written: usize,
    finished: bool,
}

impl GifOutput {
    /// Open the output and configure an infinitely repeating animation at `fps`
    pub fn create(path: impl Into<PathBuf>, style: PlotStyle, fps: u32) -> Result<Self, anyhow::Error> {
        style.validate()?;
        anyhow::ensure!(fps > 0, "Frame rate must be positive");

        let path = path.into();
        let partial_path = partial_path_for(&path);

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&partial_path)
            .with_context(|| format!("Failed to create {}", partial_path.display()))?;
        let encoder_file = file
            .try_clone()
            .with_context(|| format!("Failed to share handle for {}", partial_path.display()))?;

        let mut encoder = GifEncoder::new_with_speed(encoder_file, QUANTIZER_SPEED);
        encoder
            .set_repeat(Repeat::Infinite)
            .context("Failed to configure GIF looping")?;

        log::info!(
            "Writing {}x{} GIF at {} fps to {}",
            style.width,
            style.height,
            fps,
            partial_path.display()
        );

        Ok(Self {
            encoder: Some(encoder),
            file,
            canvas: PlotCanvas::new(style),
            delay: Delay::from_numer_denom_ms(1000, fps),
            path,
            partial_path,
            frames_written: 0,
            finished: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush the trailer and move the animation to its final path.
    ///
    /// An animation without frames is an error and is never moved into place.
    pub fn finish(mut self) -> Result<PathBuf, anyhow::Error> {
        anyhow::ensure!(
            self.frames_written > 0,
            "No frames were written to {}",
            self.partial_path.display()
        );

        // dropping the encoder writes the GIF trailer but swallows write errors
        drop(self.encoder.take());

        self.file
            .sync_all()
            .with_context(|| format!("Failed to flush {}", self.partial_path.display()))?;
        ensure_trailer(&mut self.file)
            .with_context(|| format!("Incomplete GIF in {}", self.partial_path.display()))?;
        fs::rename(&self.partial_path, &self.path).with_context(|| {
            format!(
                "Failed to move {} to {}",
                self.partial_path.display(),
                self.path.display()
            )
        })?;
        self.finished = true;

        log::info!(
            "Wrote {} frames to {}",
            self.frames_written,
            self.path.display()
        );
        Ok(self.path.clone())
    }
}

impl FrameSink for GifOutput {
    fn write_frame(&mut self, index: usize, curve: CurveSlice<'_>) -> Result<(), anyhow::Error> {
        let encoder = self
            .encoder
            .as_mut()
            .ok_or_else(|| anyhow!("GIF encoder already closed"))?;

        let pixels = self
            .canvas
            .render(curve)
            .with_context(|| format!("Failed to render frame {}", index))?;
        let image = RgbaImage::from_raw(self.canvas.width(), self.canvas.height(), pixels)
            .ok_or_else(|| anyhow!("Frame {} has the wrong pixel count", index))?;

        encoder
            .encode_frame(Frame::from_parts(image, 0, 0, self.delay))
            .with_context(|| format!("Failed to encode frame {}", index))?;
        self.frames_written += 1;
        Ok(())
    }

    fn frames_written(&self) -> usize {
        self.frames_written
    }
}

impl Drop for GifOutput {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        drop(self.encoder.take());
        if let Err(e) = fs::remove_file(&self.partial_path) {
            log::warn!(
                "Could not remove unfinished {}: {}",
                self.partial_path.display(),
                e
            );
        } else {
            log::warn!("Discarded unfinished {}", self.partial_path.display());
        }
    }
}

/// Check that the stream on disk ends with the GIF trailer
fn ensure_trailer<F: Read + Seek>(file: &mut F) -> Result<(), anyhow::Error> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))
        .context("GIF stream is empty")?;
    file.read_exact(&mut last)?;
    anyhow::ensure!(
        last[0] == GIF_TRAILER,
        "GIF stream ends with {:#04x} instead of the trailer",
        last[0]
    );
    Ok(())
}

fn partial_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".partial");
    PathBuf::from(name)
}
