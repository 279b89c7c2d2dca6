use image::RgbImage;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::{
    assemble::config::AssemblyConfig,
    assemble::report::{AssemblyReport, SpriteOutcome, SpriteStatus},
    compose::canvas::Canvas,
    compose::placer::place_sprite,
    foundation::core::{Placement, Position},
    foundation::error::{GlyphError, GlyphResult},
    layout::size::{plan_size, resize_sprite, target_area_per_stroke},
    sprite::classify::{classify, interleave_by_shape},
    sprite::model::Sprite,
    sprite::normalize::normalize_sprite,
};

/// A finished glyph: the flattened raster plus what happened to each stroke.
#[derive(Clone, Debug)]
pub struct Assembly {
    /// Opaque RGB output raster.
    pub image: RgbImage,
    /// Per-sprite placement diagnostics.
    pub report: AssemblyReport,
}

/// Composes stroke sprites into glyph rasters according to an [`AssemblyConfig`].
#[derive(Clone, Debug)]
pub struct Assembler {
    cfg: AssemblyConfig,
}

impl Assembler {
    /// Build an assembler, validating `cfg`.
    pub fn new(cfg: AssemblyConfig) -> GlyphResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// The active configuration.
    pub fn config(&self) -> &AssemblyConfig {
        &self.cfg
    }

    /// Assemble one glyph from `sprites` on a fresh black canvas.
    pub fn assemble<R>(&self, sprites: &[Sprite], rng: &mut R) -> GlyphResult<Assembly>
    where
        R: Rng + ?Sized,
    {
        self.assemble_onto(Canvas::new(self.cfg.canvas), sprites, rng)
    }

    /// Assemble one glyph on top of an existing canvas.
    ///
    /// The size of `canvas` takes precedence over the configured canvas size.
    ///
    /// Draw order is a shuffle interleaved by shape class. Each stroke gets the per-stroke area
    /// budget times `size_factor` and is placed by the randomized search; strokes whose search
    /// is exhausted are dropped. If no stroke was placed at all, the first usable sprite of the
    /// shuffle is forced into the center at its plain budget size.
    ///
    /// # Errors
    ///
    /// [`GlyphError::EmptyGroup`] for an empty `sprites` slice, and
    /// [`GlyphError::DegenerateInput`] when every sprite has zero area.
    #[tracing::instrument(skip(self, canvas, sprites, rng), fields(sprites = sprites.len()))]
    pub fn assemble_onto<R>(
        &self,
        mut canvas: Canvas,
        sprites: &[Sprite],
        rng: &mut R,
    ) -> GlyphResult<Assembly>
    where
        R: Rng + ?Sized,
    {
        if sprites.is_empty() {
            return Err(GlyphError::EmptyGroup);
        }

        let prepared = if self.cfg.normalize_strokes {
            sprites.iter().map(normalize_sprite).collect::<Vec<_>>()
        } else {
            sprites.to_vec()
        };

        let target_area =
            target_area_per_stroke(canvas.size(), prepared.len(), self.cfg.area_division);

        let mut shuffled = (0..prepared.len()).collect::<Vec<_>>();
        shuffled.shuffle(rng);
        let order = interleave_by_shape(shuffled.clone(), |&i| classify(&prepared[i]), rng);

        let opts = self.cfg.placement_opts();
        let mut report = AssemblyReport::default();
        for index in order {
            let sprite = &prepared[index];
            let class = classify(sprite);
            let planned = plan_size(
                sprite.width(),
                sprite.height(),
                target_area,
                self.cfg.size_factor,
                self.cfg.max_dim,
            );
            let (w, h) = match planned {
                Ok(dims) => dims,
                Err(err) if err.is_degenerate() => {
                    tracing::warn!(index, "skipping zero-area sprite");
                    report.outcomes.push(SpriteOutcome {
                        index,
                        class,
                        planned_size: None,
                        status: SpriteStatus::Rejected,
                    });
                    continue;
                }
                Err(err) => return Err(err),
            };

            let resized = resize_sprite(sprite, w, h);
            let status = match place_sprite(&mut canvas, &resized, &opts, rng) {
                Some(p) => SpriteStatus::Placed(p),
                None => SpriteStatus::Dropped,
            };
            report.outcomes.push(SpriteOutcome {
                index,
                class,
                planned_size: Some((w, h)),
                status,
            });
        }

        if report.placed() == 0 {
            report.fallback =
                Some(self.force_center(&mut canvas, &prepared, &shuffled, target_area)?);
        }

        tracing::debug!(
            placed = report.placed(),
            dropped = report.dropped(),
            rejected = report.rejected(),
            fallback = report.used_fallback(),
            "glyph assembled"
        );
        Ok(Assembly {
            image: canvas.into_rgb(),
            report,
        })
    }

    /// Draw the first usable sprite of the shuffled order centered in the fallback frame.
    fn force_center(
        &self,
        canvas: &mut Canvas,
        sprites: &[Sprite],
        shuffled: &[usize],
        target_area: f64,
    ) -> GlyphResult<Placement> {
        let Some(sprite) = shuffled
            .iter()
            .map(|&i| &sprites[i])
            .find(|s| !s.is_degenerate())
        else {
            let (w, h) = sprites[shuffled[0]].dimensions();
            return Err(GlyphError::degenerate(w, h));
        };

        let (w, h) = plan_size(
            sprite.width(),
            sprite.height(),
            target_area,
            1.0,
            self.cfg.max_dim,
        )?;
        let resized = resize_sprite(sprite, w, h);
        let frame = self.cfg.fallback_frame.reference(canvas.size());
        let pos = Position::new(
            (i64::from(frame.width) - i64::from(w)).div_euclid(2),
            (i64::from(frame.height) - i64::from(h)).div_euclid(2),
        );
        canvas.composite(&resized, pos);

        tracing::warn!(x = pos.x, y = pos.y, w, h, "no stroke placed, forced centered fallback");
        Ok(Placement {
            position: pos,
            width: w,
            height: h,
            attempt: 0,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/assembler.rs"]
mod tests;
