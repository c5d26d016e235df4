use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

use gildedrose_simulator::{SimulationConfig, run_simulation};

#[derive(Parser)]
#[command(name = "gilded-rose")]
#[command(about = "Simulate end-of-day stock updates and print the stock table per day", long_about = None)]
struct Cli {
    /// Number of days to simulate (default: $GILDED_ROSE_DAYS or 7)
    #[arg(short, long)]
    days: Option<u32>,

    /// JSON stock file: [{"name": .., "sell_in": .., "quality": ..}, ..]
    #[arg(short, long)]
    items: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let cli = Cli::parse();
    let config = SimulationConfig::resolve(cli.days, cli.items);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(err) = run_simulation(&config, &mut out) {
        tracing::error!(error = %err, "simulation failed");
        return Err(err.into());
    }

    out.flush()?;
    Ok(())
}
