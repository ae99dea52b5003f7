use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use grid_robots::{GridConfig, RobotInterpreter, read_instructions};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "grid-robots",
    version,
    about = "Run a robot instruction file on a square grid"
)]
struct Cli {
    /// Line-delimited instruction file.
    #[arg(default_value = "instructions.txt")]
    path: PathBuf,

    /// Side length of the square grid.
    #[arg(
        long,
        env = "GRID_ROBOTS_SIZE",
        default_value_t = 5,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    grid_size: i32,

    /// Print each report as a JSON object instead of plain lines.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let instructions = read_instructions(&cli.path)
        .with_context(|| format!("failed to load instructions from {}", cli.path.display()))?;
    info!(
        count = instructions.len(),
        grid_size = cli.grid_size,
        "running instructions"
    );

    let mut interpreter = RobotInterpreter::new(GridConfig {
        grid_size: cli.grid_size,
    });
    for report in interpreter.run(&instructions) {
        if cli.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            print!("{report}");
        }
    }
    Ok(())
}
