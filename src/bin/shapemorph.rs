use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, ValueEnum};
use shapemorph::{
    Ease, FillColor, FillRule, MorphConfig, MorphSession, OutputFormat, RegionPolicy, RenderOpts,
    Rgba8,
};

/// Morph one filled shape into another and write the frames as a GIF or an image sequence.
#[derive(Parser, Debug)]
#[command(name = "shapemorph", version)]
struct Cli {
    /// Image holding the start shape.
    from: PathBuf,

    /// Image holding the end shape.
    to: PathBuf,

    /// Output GIF file, or directory for PNG/JPEG frames (default: res.gif / res).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of frames.
    #[arg(short = 'n', long)]
    frames: Option<u32>,

    /// Total animation duration in seconds.
    #[arg(short, long)]
    duration: Option<f64>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = FormatChoice::Gif)]
    format: FormatChoice,

    /// GIF repeat count; 0 loops forever.
    #[arg(short, long = "loop")]
    loop_count: Option<u16>,

    /// Contour points per shape.
    #[arg(short = 'k', long)]
    points: Option<usize>,

    /// JSON morph config; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Solid fill color (#RRGGBB or #RRGGBBAA) instead of blending the shapes' colors.
    #[arg(long)]
    fill: Option<Rgba8>,

    /// Output background color.
    #[arg(long)]
    background: Option<Rgba8>,

    /// Keep the largest region when an input has several.
    #[arg(long)]
    largest_region: bool,

    /// Fill with the even-odd rule instead of non-zero winding.
    #[arg(long)]
    even_odd: bool,

    /// Easing curve (linear, in_quad, out_quad, in_out_quad, in_out_cubic, smooth_step).
    #[arg(long)]
    ease: Option<Ease>,

    /// Also try the target contour traversed backwards when aligning.
    #[arg(long)]
    search_reversed: bool,

    /// Render frames on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel.
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per parallel batch.
    #[arg(long, default_value_t = 16)]
    chunk_size: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Gif,
    Png,
    Jpeg,
}

impl From<FormatChoice> for OutputFormat {
    fn from(value: FormatChoice) -> Self {
        match value {
            FormatChoice::Gif => OutputFormat::Gif,
            FormatChoice::Png => OutputFormat::Png,
            FormatChoice::Jpeg => OutputFormat::Jpeg,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli)?;
    let format = OutputFormat::from(cli.format);
    let out = shapemorph::resolve_output(format, cli.output.as_deref())?;

    let session = MorphSession::from_paths(&cli.from, &cli.to, config)
        .with_context(|| format!("morph '{}' -> '{}'", cli.from.display(), cli.to.display()))?;

    let opts = RenderOpts {
        parallel: cli.parallel,
        chunk_size: cli.chunk_size,
        threads: cli.threads,
    };
    let mut sink = shapemorph::open_sink(format, &out);
    let stats = session.render_to_sink(sink.as_mut(), &opts)?;

    eprintln!("wrote {} ({} frames)", out.display(), stats.frames_total);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn build_config(cli: &Cli) -> anyhow::Result<MorphConfig> {
    let mut cfg = match &cli.config {
        Some(path) => MorphConfig::from_path(path)?,
        None => MorphConfig::default(),
    };

    if let Some(n) = cli.frames {
        cfg.frames = n;
    }
    if let Some(d) = cli.duration {
        cfg.duration_secs = d;
    }
    if let Some(l) = cli.loop_count {
        cfg.loop_count = l;
    }
    if let Some(k) = cli.points {
        cfg.points = k;
    }
    if let Some(c) = cli.fill {
        cfg.fill = FillColor::Solid(c);
    }
    if let Some(c) = cli.background {
        cfg.background = c;
    }
    if cli.largest_region {
        cfg.region_policy = RegionPolicy::Largest;
    }
    if cli.even_odd {
        cfg.fill_rule = FillRule::EvenOdd;
    }
    if let Some(e) = cli.ease {
        cfg.ease = e;
    }
    if cli.search_reversed {
        cfg.search_reversed = true;
    }

    cfg.validate()?;
    Ok(cfg)
}
