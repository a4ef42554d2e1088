use anyhow::{bail, Context, Result};
use sector_forecast::{analyze, AnalysisConfig, Classification, DataLoader, TimePoint};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "usage: sector_outlook <table.csv> [--anchor YYYY-MM] [--horizon N] [--json]";

struct Args {
    input: PathBuf,
    config: AnalysisConfig,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut input = None;
    let mut config = AnalysisConfig::default();
    let mut json = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--anchor" => {
                let value = args.next().context("--anchor needs a value")?;
                let anchor: TimePoint = value
                    .parse()
                    .with_context(|| format!("bad --anchor '{}'", value))?;
                config = config.with_anchor(anchor);
            }
            "--horizon" => {
                let value = args.next().context("--horizon needs a value")?;
                let horizon: usize = value
                    .parse()
                    .with_context(|| format!("bad --horizon '{}'", value))?;
                config = config.with_horizon(horizon)?;
            }
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other if other.starts_with('-') => bail!("unknown flag '{}'\n{}", other, USAGE),
            other => {
                if input.replace(PathBuf::from(other)).is_some() {
                    bail!("only one input table is supported\n{}", USAGE);
                }
            }
        }
    }

    Ok(Args {
        input: input.context(USAGE)?,
        config,
        json,
    })
}

fn main() -> Result<()> {
    // ─── logging ─────────────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    let industries = DataLoader::from_csv(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;

    let report = analyze(&industries, &Classification::standard(), &args.config)?;
    info!(sectors = report.sectors.len(), "analysis complete");

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
