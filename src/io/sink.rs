use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbImage;

use crate::foundation::error::GlyphResult;

/// Consumer of finished glyph rasters.
///
/// `write_glyph` is called once per successfully assembled group, in group order.
pub trait GlyphSink {
    /// Persist or collect the raster for `group`.
    fn write_glyph(&mut self, group: &str, image: &RgbImage) -> GlyphResult<()>;
}

/// Writes `<out_dir>/<group>.png`.
#[derive(Clone, Debug)]
pub struct PngDirSink {
    out_dir: PathBuf,
}

impl PngDirSink {
    /// Sink writing into `out_dir`, created on first write.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Destination path for `group`.
    pub fn path_for(&self, group: &str) -> PathBuf {
        self.out_dir.join(format!("{group}.png"))
    }
}

impl GlyphSink for PngDirSink {
    fn write_glyph(&mut self, group: &str, image: &RgbImage) -> GlyphResult<()> {
        std::fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("create output dir '{}'", self.out_dir.display()))?;
        let path = self.path_for(group);
        image
            .save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "wrote glyph");
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    /// Glyphs in the order they were written.
    pub glyphs: Vec<(String, RgbImage)>,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GlyphSink for InMemorySink {
    fn write_glyph(&mut self, group: &str, image: &RgbImage) -> GlyphResult<()> {
        self.glyphs.push((group.to_string(), image.clone()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/sink.rs"]
mod tests;
