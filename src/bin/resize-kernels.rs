use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use resize_kernels::{AxisConfig, FilterKind, MosaicParams};

#[derive(Parser, Debug)]
#[command(name = "resize-kernels", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the one-line table description.
    Describe(AxisArgs),
    /// Print the whole table as JSON.
    Dump(DumpArgs),
}

#[derive(Parser, Debug)]
struct AxisArgs {
    /// Axis config JSON. Overrides the inline flags when given.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source axis length.
    #[arg(long, required_unless_present = "config")]
    source: Option<usize>,

    /// Destination axis length.
    #[arg(long, required_unless_present = "config")]
    destination: Option<usize>,

    /// Filter name (box, triangle, catmull_rom, mitchell, lanczos2, lanczos3).
    #[arg(long, default_value = "catmull_rom")]
    filter: String,

    /// Mosaic repeat period. Requires --corner-interval.
    #[arg(long, requires = "corner_interval")]
    period: Option<usize>,

    /// Mosaic corner interval. Requires --period.
    #[arg(long, requires = "period")]
    corner_interval: Option<usize>,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    #[command(flatten)]
    axis: AxisArgs,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Describe(args) => {
            let map = load_config(&args)?.build()?;
            println!("{}", map.describe());
        }
        Command::Dump(args) => {
            let map = load_config(&args.axis)?.build()?;
            let dump = map.dump();
            let out = if args.pretty {
                serde_json::to_string_pretty(&dump)
            } else {
                serde_json::to_string(&dump)
            }
            .context("serialize kernel map")?;
            println!("{out}");
        }
    }
    Ok(())
}

fn load_config(args: &AxisArgs) -> anyhow::Result<AxisConfig> {
    if let Some(path) = &args.config {
        return AxisConfig::from_path(path)
            .with_context(|| format!("load config {}", path.display()));
    }

    let source_size = args.source.context("--source is required")?;
    let destination_size = args.destination.context("--destination is required")?;
    let filter = FilterKind::parse(&args.filter)?;
    let mosaic = match (args.period, args.corner_interval) {
        (Some(period), Some(corner_interval)) => Some(MosaicParams {
            period,
            corner_interval,
        }),
        _ => None,
    };
    let cfg = AxisConfig {
        source_size,
        destination_size,
        filter,
        mosaic,
    };
    cfg.validate()?;
    Ok(cfg)
}
