//! `aoc-web`: serve the puzzle workbench, or run a single day from the shell.

use std::{io::Read, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Context};
use aoc_web::{
    config::{build_config, CliArgs as ConfigCliArgs, LogLevel},
    input::SampleInputs,
    puzzles::{self, Options, PuzzleId, DAYS},
    server::Server,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "aoc-web")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web server
    Serve(ServeArgs),

    /// Solve one day on a file, or on stdin when no file is given
    Solve {
        /// Day to run, as YEAR.DAY (e.g. 2023.07)
        slug: PuzzleId,

        /// Puzzle input file
        file: Option<PathBuf>,

        /// Value of the first option field
        #[arg(long, allow_hyphen_values = true)]
        one: Option<i64>,

        /// Value of the second option field
        #[arg(long, allow_hyphen_values = true)]
        two: Option<i64>,

        /// Print how long the solve took
        #[arg(long)]
        timings: bool,

        /// Log level (trace, debug, info, warn, error)
        #[arg(long, default_value = "warn", env = "AOC_LOG_LEVEL")]
        log_level: String,
    },

    /// List the days with a solver, and their sample inputs
    List {
        /// Directory holding one sample-input directory per day
        #[arg(long, default_value = "inputs", env = "AOC_INPUTS_DIR")]
        inputs_dir: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct ServeArgs {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "AOC_WEB_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "AOC_WEB_PORT")]
    port: Option<u16>,

    /// Directory holding one sample-input directory per day
    #[arg(long, env = "AOC_INPUTS_DIR")]
    inputs_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "AOC_LOG_LEVEL")]
    log_level: Option<String>,
}

impl From<ServeArgs> for ConfigCliArgs {
    fn from(args: ServeArgs) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            inputs_dir: args.inputs_dir,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = build_config(&args.into())?;
    init_tracing(config.log_level.as_filter_str());

    tracing::info!("aoc-web v{}", aoc_web::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        inputs_dir = %config.inputs_dir.display(),
        "Server configuration loaded"
    );

    let server = Server::new(config);
    tracing::info!(address = %server.config().socket_addr(), "Starting server");
    server.run().await?;
    Ok(())
}

fn solve(
    id: PuzzleId,
    file: Option<PathBuf>,
    options: Options,
    timings: bool,
) -> anyhow::Result<()> {
    let day = puzzles::find(id).ok_or_else(|| anyhow!("{id} is not solved yet"))?;

    let input = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("could not read {}", path.display()))?,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("could not read stdin")?;
            input
        }
    };

    let mut report = day
        .run(&input.replace("\r\n", "\n"), &options)
        .with_context(|| format!("{} failed", day.title()))?;

    let elapsed = report.take_elapsed();
    println!("{}", day.title());
    print!("{report}");
    if let (true, Some(elapsed)) = (timings, elapsed) {
        println!("Compute time: {elapsed:?}");
    }
    Ok(())
}

fn list(inputs_dir: PathBuf) -> anyhow::Result<()> {
    let samples = SampleInputs::new(inputs_dir);
    for day in DAYS {
        let files = samples.list(day.id)?;
        println!("{}  {:<40} {}", day.id, day.title(), files.join(", "));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Command::Serve(args) => serve(args).await,
        Command::Solve {
            slug,
            file,
            one,
            two,
            timings,
            log_level,
        } => {
            init_tracing(LogLevel::from_str(&log_level)?.as_filter_str());
            let options = Options {
                first: one,
                second: two,
            };
            tokio::task::spawn_blocking(move || solve(slug, file, options, timings)).await?
        }
        Command::List { inputs_dir } => list(inputs_dir),
    }
}
