//! Assembly of the full calibration routine.

use bedcal_gcode::{sequence, PrinterProfile};
use bedcal_patterns::{frame_pass, meander, CalibrationSettings, MeanderTable, FRAME_PASSES};
use bedcal_queue::CommandSink;

/// Emit the complete first-layer calibration routine, in order:
/// preheat, filament load (MMU machines), flow-rate selection, intro
/// purge line, meander preamble, the meander itself, then the sixteen
/// frame passes. The frame iteration counter lives here, per that
/// generator's calling contract.
pub fn run(
    profile: &PrinterProfile,
    settings: &CalibrationSettings,
    filament: u8,
    sink: &mut impl CommandSink,
) -> anyhow::Result<()> {
    settings.validate()?;
    tracing::debug!(bed_x = settings.bed_x, bed_y = settings.bed_y, "starting routine");

    for cmd in sequence::PREHEAT {
        sink.emit(*cmd)?;
    }
    for cmd in sequence::load_filament(profile.mmu, filament) {
        sink.emit(cmd)?;
    }
    sink.emit(sequence::flow_rate(profile.nozzle_diameter))?;
    for cmd in sequence::intro_line(profile.mmu) {
        sink.emit(*cmd)?;
    }
    for cmd in sequence::BEFORE_MEANDER {
        sink.emit(*cmd)?;
    }

    let table = MeanderTable::new(settings);
    for cmd in meander(&table, settings.first_layer_z) {
        sink.emit(cmd)?;
    }

    for i in 0..FRAME_PASSES {
        for cmd in frame_pass(settings, i) {
            sink.emit(cmd)?;
        }
    }

    tracing::debug!("routine complete");
    Ok(())
}
