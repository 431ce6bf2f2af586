//! Animation export: rendered frames to a looping GIF or a PNG sequence.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, ImageFormat, RgbaImage};

use swarm_core::constants::DEFAULT_FRAME_DELAY_MS;
use swarm_core::types::FrameIndex;

use crate::error::ExportError;

/// Collects rendered frames in order and writes them out.
#[derive(Debug, Clone)]
pub struct AnimationExporter {
    frames: Vec<(FrameIndex, RgbaImage)>,
    delay_ms: u32,
}

impl AnimationExporter {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            frames: Vec::new(),
            delay_ms,
        }
    }

    /// Append the image rendered for `frame`.
    pub fn push(&mut self, frame: FrameIndex, image: RgbaImage) {
        self.frames.push((frame, image));
    }

    pub fn frames(&self) -> &[(FrameIndex, RgbaImage)] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Write every collected frame as one infinitely looping GIF.
    pub fn write_gif(&self, path: &Path) -> Result<(), ExportError> {
        if self.frames.is_empty() {
            return Err(ExportError::NoFrames);
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(File::create(path)?);
        let mut encoder = GifEncoder::new(writer);
        encoder.set_repeat(Repeat::Infinite)?;

        let delay = Delay::from_numer_denom_ms(self.delay_ms, 1);
        encoder.encode_frames(
            self.frames
                .iter()
                .map(|(_, image)| Frame::from_parts(image.clone(), 0, 0, delay)),
        )?;
        Ok(())
    }

    /// Write each frame to `dir/frame_<n>.png`, `n` being the frame index.
    /// Returns the written paths in order.
    pub fn write_png_frames(&self, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        if self.frames.is_empty() {
            return Err(ExportError::NoFrames);
        }
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(self.frames.len());
        for (frame, image) in &self.frames {
            let path = dir.join(format!("frame_{frame}.png"));
            image.save_with_format(&path, ImageFormat::Png)?;
            written.push(path);
        }
        Ok(written)
    }
}

impl Default for AnimationExporter {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_DELAY_MS)
    }
}
