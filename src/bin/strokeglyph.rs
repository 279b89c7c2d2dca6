use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "strokeglyph", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble one glyph PNG per stroke group directory.
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input root; each subdirectory of PNG strokes is one group.
    #[arg(long = "in")]
    in_dir: PathBuf,

    /// Output directory for `<group>.png` files.
    #[arg(long)]
    out: PathBuf,

    /// Assembly config JSON. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Canvas width in pixels.
    #[arg(long)]
    canvas_width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    canvas_height: Option<u32>,

    /// Placement attempts per stroke.
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Assemble groups on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Groups assembled per parallel round before their PNGs are written.
    #[arg(long, default_value_t = 16)]
    chunk_size: usize,

    /// Worker threads when `--parallel` is set.
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &GenerateArgs) -> anyhow::Result<strokeglyph::AssemblyConfig> {
    let mut cfg = match &args.config {
        Some(path) => strokeglyph::AssemblyConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => strokeglyph::AssemblyConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(w) = args.canvas_width {
        cfg.canvas.width = w;
    }
    if let Some(h) = args.canvas_height {
        cfg.canvas.height = h;
    }
    if let Some(n) = args.max_attempts {
        cfg.max_attempts = n;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    let assembler = strokeglyph::Assembler::new(cfg)?;

    let groups = strokeglyph::discover_groups(&args.in_dir)
        .with_context(|| format!("discover stroke groups in '{}'", args.in_dir.display()))?;
    if groups.is_empty() {
        tracing::warn!(dir = %args.in_dir.display(), "no group directories found");
    }

    let opts = strokeglyph::BatchOpts {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let mut sink = strokeglyph::PngDirSink::new(&args.out);
    let stats = strokeglyph::run_batch(&groups, &assembler, &opts, &mut sink)?;

    eprintln!(
        "wrote {}/{} glyphs to {} (strokes placed {}, dropped {}, rejected {}, fallbacks {})",
        stats.groups_written,
        stats.groups_total,
        sink.out_dir().display(),
        stats.sprites_placed,
        stats.sprites_dropped,
        stats.sprites_rejected,
        stats.fallbacks,
    );
    for name in &stats.failed_groups {
        eprintln!("  failed: {name}");
    }
    Ok(())
}
