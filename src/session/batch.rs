use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::{
    assemble::assembler::{Assembler, Assembly},
    foundation::error::{GlyphError, GlyphResult},
    foundation::math::group_seed,
    io::sink::GlyphSink,
    io::source::{GroupInput, StrokeGroup},
};

/// Options controlling how a batch of groups is scheduled.
#[derive(Clone, Debug)]
pub struct BatchOpts {
    /// Assemble groups on a dedicated rayon thread pool.
    pub parallel: bool,
    /// Groups assembled per parallel round before their glyphs are flushed to the sink.
    /// `0` is treated as `1`.
    pub chunk_size: usize,
    /// Worker count for the pool. `None` lets rayon pick one per core.
    pub threads: Option<usize>,
}

impl Default for BatchOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 16,
            threads: None,
        }
    }
}

/// Aggregate counters for a batch run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Groups handed to the batch.
    pub groups_total: usize,
    /// Groups whose glyph reached the sink.
    pub groups_written: usize,
    /// Names of groups that failed to load, assemble or persist, in group order.
    pub failed_groups: Vec<String>,
    /// Strokes placed by the search across all groups.
    pub sprites_placed: usize,
    /// Strokes dropped after exhausting their attempts.
    pub sprites_dropped: usize,
    /// Zero-area strokes skipped.
    pub sprites_rejected: usize,
    /// Groups that needed the forced fallback placement.
    pub fallbacks: usize,
}

impl BatchStats {
    fn record(&mut self, name: &str, result: GlyphResult<Assembly>, sink: &mut dyn GlyphSink) {
        let written = result.and_then(|assembly| {
            sink.write_glyph(name, &assembly.image)?;
            Ok(assembly)
        });
        match written {
            Ok(assembly) => {
                let report = &assembly.report;
                self.groups_written += 1;
                self.sprites_placed += report.placed();
                self.sprites_dropped += report.dropped();
                self.sprites_rejected += report.rejected();
                self.fallbacks += usize::from(report.used_fallback());
                if report.dropped() > 0 {
                    tracing::info!(
                        group = name,
                        dropped = report.dropped(),
                        "some strokes could not be placed"
                    );
                }
            }
            Err(err) => {
                tracing::error!(group = name, error = %err, "group failed");
                self.failed_groups.push(name.to_string());
            }
        }
    }
}

/// Assemble every group and hand each finished glyph to `sink`, in group order.
///
/// Groups are loaded lazily through [`GroupInput`]. The sequential path loads, assembles and
/// writes one group at a time; the parallel path does the same for rounds of
/// [`BatchOpts::chunk_size`] groups, so at most one round of glyphs is held in memory.
///
/// A group that fails (unreadable directory, no sprites, only degenerate sprites, sink error) is
/// logged and recorded in [`BatchStats::failed_groups`]; the remaining groups still run. Only
/// scheduling problems, such as an invalid thread count, fail the whole batch.
///
/// With a configured seed, each group draws from its own generator seeded from the run seed and
/// the group name, so sequential and parallel runs produce identical glyphs.
#[tracing::instrument(skip_all, fields(groups = groups.len(), parallel = opts.parallel))]
pub fn run_batch<G: GroupInput>(
    groups: &[G],
    assembler: &Assembler,
    opts: &BatchOpts,
    sink: &mut dyn GlyphSink,
) -> GlyphResult<BatchStats> {
    let mut stats = BatchStats {
        groups_total: groups.len(),
        ..BatchStats::default()
    };

    if opts.parallel {
        let pool = worker_pool(opts.threads)?;
        for chunk in groups.chunks(opts.chunk_size.max(1)) {
            let results = pool.install(|| {
                chunk
                    .par_iter()
                    .map(|g| load_and_assemble(assembler, g))
                    .collect::<Vec<_>>()
            });
            for (group, result) in chunk.iter().zip(results) {
                stats.record(group.group_name(), result, sink);
            }
        }
    } else {
        for group in groups {
            let result = load_and_assemble(assembler, group);
            stats.record(group.group_name(), result, sink);
        }
    }

    tracing::info!(
        written = stats.groups_written,
        failed = stats.failed_groups.len(),
        "batch finished"
    );
    Ok(stats)
}

/// Assemble one group with its own generator.
pub fn assemble_group(assembler: &Assembler, group: &StrokeGroup) -> GlyphResult<Assembly> {
    let mut rng = match assembler.config().seed {
        Some(seed) => StdRng::seed_from_u64(group_seed(seed, &group.name)),
        None => StdRng::from_entropy(),
    };
    assembler.assemble(&group.sprites, &mut rng)
}

fn load_and_assemble<G: GroupInput>(assembler: &Assembler, input: &G) -> GlyphResult<Assembly> {
    let group = input.strokes()?;
    assemble_group(assembler, &group)
}

fn worker_pool(threads: Option<usize>) -> GlyphResult<rayon::ThreadPool> {
    let mut builder =
        rayon::ThreadPoolBuilder::new().thread_name(|i| format!("strokeglyph-worker-{i}"));
    match threads {
        Some(0) => {
            return Err(GlyphError::validation(
                "parallel batch needs at least one worker thread, got threads = 0",
            ));
        }
        Some(n) => builder = builder.num_threads(n),
        None => {}
    }
    builder
        .build()
        .map_err(|e| GlyphError::Other(anyhow::anyhow!("start glyph worker pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/session/batch.rs"]
mod tests;
