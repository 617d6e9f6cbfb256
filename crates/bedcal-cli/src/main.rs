//! bedcal - first-layer (Z-offset) calibration G-code generator.
//!
//! Streams the calibration routine through a bounded command queue to
//! stdout or a file, the way the firmware-side command interpreter
//! would drain it.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bedcal_gcode::PrinterProfile;
use bedcal_patterns::CalibrationSettings;
use bedcal_queue::{bounded, QueueReceiver};

mod routine;

#[derive(Parser)]
#[command(name = "bedcal")]
#[command(about = "Generate first-layer calibration G-code", long_about = None)]
struct Cli {
    /// Maximum X travel of the bed (mm)
    #[arg(long, default_value_t = 250.0)]
    bed_x: f64,

    /// Maximum Y travel of the bed (mm)
    #[arg(long, default_value_t = 210.0)]
    bed_y: f64,

    /// Nozzle diameter (mm), selects the flow-rate command
    #[arg(long, default_value_t = 0.4)]
    nozzle: f64,

    /// Machine has a multi-material unit
    #[arg(long)]
    mmu: bool,

    /// Filament slot to load (MMU machines)
    #[arg(long, default_value_t = 0)]
    filament: u8,

    /// Command queue capacity
    #[arg(long, default_value_t = 32)]
    queue_capacity: usize,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = CalibrationSettings {
        bed_x: cli.bed_x,
        bed_y: cli.bed_y,
        ..Default::default()
    };
    let profile = PrinterProfile {
        bed_x: cli.bed_x,
        bed_y: cli.bed_y,
        nozzle_diameter: cli.nozzle,
        mmu: cli.mmu,
        ..PrinterProfile::mk3()
    };

    let mut out: Box<dyn Write + Send> = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout()),
    };

    let (mut tx, rx) = bounded(cli.queue_capacity.max(1));

    let drain = std::thread::spawn(move || drain_queue(rx, out));

    let routine_result = routine::run(&profile, &settings, cli.filament, &mut tx);
    drop(tx);

    // Join the drain before judging the routine: a failed write drops
    // the receiver, which the routine only sees as a disconnected
    // queue. The drain's own error is the root cause.
    drain
        .join()
        .map_err(|_| anyhow::anyhow!("drain thread panicked"))??;
    routine_result?;
    Ok(())
}

/// Drain loop: one line per command, queue order, until every sender
/// is gone.
fn drain_queue(mut rx: QueueReceiver, mut out: Box<dyn Write + Send>) -> Result<()> {
    while let Some(cmd) = rx.recv() {
        writeln!(out, "{}", cmd)?;
    }
    out.flush()?;
    Ok(())
}
