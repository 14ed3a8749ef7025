use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vecspace::{FormatRegistry, LayoutSettings, PointSet, VectorSpace};

/// Lay out high-dimensional points in 3D around a focus point.
#[derive(Parser)]
#[command(name = "vecspace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random point set
    Random {
        /// Number of points
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Dimensions per point
        #[arg(short, long, default_value = "8")]
        dim: usize,

        /// Edge length of the sampling cube
        #[arg(short, long, default_value = "15")]
        range: f64,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file (.json or .yaml)
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Run the layout simulation and write the resulting snapshot
    Layout(LayoutArgs),
    /// Print the nearest neighbors of a point
    Neighbors {
        /// Input point set (.json, .yaml)
        #[arg(short, long)]
        input: PathBuf,

        /// Point to inspect
        #[arg(short, long)]
        focus: usize,

        /// Number of neighbors [default: 10, capped at the point count - 1]
        #[arg(short, long)]
        k: Option<usize>,
    },
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn random(
    count: usize,
    dim: usize,
    range: f64,
    seed: Option<u64>,
    output: &Path,
) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let points = PointSet::random(count, dim, range, &mut rng)?;

    FormatRegistry::with_defaults()
        .write_points(&points, output)
        .with_context(|| format!("writing {}", output.display()))?;

    info!(count, dim, path = %output.display(), "wrote random point set");
    Ok(())
}

#[derive(Args)]
struct LayoutArgs {
    /// Input point set (.json, .yaml)
    #[arg(short, long)]
    input: PathBuf,

    /// Settings file (YAML or JSON)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Point to focus before simulating
    #[arg(short, long)]
    focus: Option<usize>,

    /// Number of ticks to run
    #[arg(short, long, default_value = "600")]
    ticks: usize,

    /// Time step per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Output format (json, yaml)
    #[arg(long, default_value = "json")]
    format: String,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn layout(args: LayoutArgs) -> anyhow::Result<()> {
    let registry = FormatRegistry::with_defaults();
    let writer = registry.writer(&args.format)?;

    let points = registry
        .read_points(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let settings = match &args.settings {
        Some(path) => LayoutSettings::load(path)
            .with_context(|| format!("reading settings {}", path.display()))?,
        None => LayoutSettings {
            k: default_k(&points),
            ..Default::default()
        },
    };

    let mut space = VectorSpace::new(points, settings)?;
    if let Some(focus) = args.focus {
        space.change_focus(focus)?;
    }
    space.run(args.ticks, args.dt)?;
    info!(
        ticks = args.ticks,
        max_force = space.max_force(),
        kinetic_energy = space.kinetic_energy(),
        "simulation finished"
    );

    let snapshot = space.snapshot();
    match &args.output {
        Some(path) => {
            writer.write(&snapshot, path)?;
            info!(path = %path.display(), "wrote layout");
        }
        None => println!("{}", writer.render(&snapshot)?),
    }
    Ok(())
}

/// Default neighborhood size, capped so small point sets stay valid
fn default_k(points: &PointSet) -> usize {
    LayoutSettings::default().k.min(points.len() - 1)
}

fn neighbors(input: &Path, focus: usize, k: Option<usize>) -> anyhow::Result<()> {
    let registry = FormatRegistry::with_defaults();
    let points = registry
        .read_points(input)
        .with_context(|| format!("reading {}", input.display()))?;

    let settings = LayoutSettings {
        k: k.unwrap_or_else(|| default_k(&points)),
        seed: Some(0),
        ..Default::default()
    };
    let mut space = VectorSpace::new(points, settings)?;
    let nn = space.change_focus(focus)?.to_vec();

    for (rank, j) in nn.iter().enumerate() {
        println!("{}\t{}\t{:.6}", rank + 1, j, space.distances().get(focus, *j));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Random {
            count,
            dim,
            range,
            seed,
            output,
        } => random(count, dim, range, seed, &output)?,
        Commands::Layout(args) => layout(args)?,
        Commands::Neighbors { input, focus, k } => neighbors(&input, focus, k)?,
    }

    Ok(())
}
