use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    foundation::error::{GlyphError, GlyphResult},
    sprite::model::Sprite,
};

/// Stroke sprites that together make up one output glyph.
#[derive(Clone, Debug)]
pub struct StrokeGroup {
    /// Group name, used as the output file stem.
    pub name: String,
    /// Decoded sprites in file-name order.
    pub sprites: Vec<Sprite>,
}

/// Decode encoded image bytes into an RGBA sprite.
pub fn decode_sprite(bytes: &[u8]) -> GlyphResult<Sprite> {
    let dyn_img = image::load_from_memory(bytes).context("decode sprite from memory")?;
    Ok(Sprite::from_rgba(dyn_img.to_rgba8()))
}

/// Read and decode one sprite file.
pub fn load_sprite(path: &Path) -> GlyphResult<Sprite> {
    let bytes = std::fs::read(path).with_context(|| format!("read sprite '{}'", path.display()))?;
    decode_sprite(&bytes)
        .map_err(|e| GlyphError::Other(anyhow::anyhow!("sprite '{}': {e}", path.display())))
}

/// Load every `*.png` directly inside `dir` as one group.
///
/// Files that fail to decode and zero-area images are logged and skipped. The returned group may
/// be empty; assembling it reports [`GlyphError::EmptyGroup`].
pub fn load_group(dir: &Path) -> GlyphResult<StrokeGroup> {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            GlyphError::validation(format!("group path '{}' has no name", dir.display()))
        })?;

    let mut sprites = Vec::new();
    for path in png_files(dir)? {
        match load_sprite(&path) {
            Ok(sprite) if sprite.is_degenerate() => {
                tracing::warn!(path = %path.display(), "skipping zero-area sprite");
            }
            Ok(sprite) => sprites.push(sprite),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping unreadable sprite");
            }
        }
    }

    if sprites.is_empty() {
        tracing::error!(group = %name, dir = %dir.display(), "no png strokes found");
    } else {
        tracing::info!(group = %name, strokes = sprites.len(), "loaded stroke group");
    }
    Ok(StrokeGroup { name, sprites })
}

/// A group directory found on disk whose strokes have not been decoded yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSource {
    /// Group name, the directory's file name.
    pub name: String,
    /// Directory holding the group's `*.png` strokes.
    pub dir: PathBuf,
}

impl GroupSource {
    /// Decode the group's strokes.
    pub fn load(&self) -> GlyphResult<StrokeGroup> {
        load_group(&self.dir)
    }

    /// Decode the group's strokes, degrading an unreadable directory to an empty group.
    ///
    /// The empty group is then reported as failed by the assembler instead of aborting the run.
    pub fn load_or_empty(&self) -> StrokeGroup {
        self.load().unwrap_or_else(|err| {
            tracing::warn!(group = %self.name, error = %err, "group directory unreadable");
            StrokeGroup {
                name: self.name.clone(),
                sprites: Vec::new(),
            }
        })
    }
}

/// List every immediate subdirectory of `root` as a group, sorted by name, without decoding.
///
/// Only an unreadable `root` is an error.
pub fn discover_groups(root: &Path) -> GlyphResult<Vec<GroupSource>> {
    Ok(read_dir_sorted(root)?
        .into_iter()
        .filter(|p| p.is_dir())
        .map(|dir| GroupSource {
            name: dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            dir,
        })
        .collect())
}

/// Discover and decode every group under `root`.
///
/// Groups whose directory cannot be read come back empty. Holds every decoded sprite at once;
/// large inputs should hand [`discover_groups`] to the batch runner instead.
pub fn load_groups(root: &Path) -> GlyphResult<Vec<StrokeGroup>> {
    Ok(discover_groups(root)?
        .iter()
        .map(GroupSource::load_or_empty)
        .collect())
}

/// Input the batch runner can turn into a stroke group when it is that group's turn.
pub trait GroupInput: Sync {
    /// Group name, used for logging and as the output file stem.
    fn group_name(&self) -> &str;

    /// The group's decoded strokes.
    fn strokes(&self) -> GlyphResult<Cow<'_, StrokeGroup>>;
}

impl GroupInput for StrokeGroup {
    fn group_name(&self) -> &str {
        &self.name
    }

    fn strokes(&self) -> GlyphResult<Cow<'_, StrokeGroup>> {
        Ok(Cow::Borrowed(self))
    }
}

impl GroupInput for GroupSource {
    fn group_name(&self) -> &str {
        &self.name
    }

    fn strokes(&self) -> GlyphResult<Cow<'_, StrokeGroup>> {
        self.load().map(Cow::Owned)
    }
}

fn png_files(dir: &Path) -> GlyphResult<Vec<PathBuf>> {
    Ok(read_dir_sorted(dir)?
        .into_iter()
        .filter(|p| p.is_file() && has_png_extension(p))
        .collect())
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

fn read_dir_sorted(dir: &Path) -> GlyphResult<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read directory '{}'", dir.display()))?;
    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("list directory '{}'", dir.display()))?;
        out.push(entry.path());
    }
    out.sort();
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/io/source.rs"]
mod tests;
