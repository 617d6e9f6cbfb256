//! Meander (zig-zag) pattern generator.

use bedcal_gcode::{Command, Move};

use crate::table::MeanderTable;
use crate::{BED_MARGIN, FRAME_TOP_Y};

/// Number of commands one meander traversal emits.
pub const MEANDER_COMMAND_COUNT: usize = 16;

/// X position the hand-tuned entry segment runs to (mm).
const ENTRY_X: f64 = 70.0;

/// Filament fed over the entry segment (mm).
const ENTRY_E: f64 = 5.0;

/// Feedrate for the Z drop (mm/min).
const Z_DROP_FEEDRATE: f64 = 7200.0;

/// Print feedrate for the whole pattern (mm/min).
const PRINT_FEEDRATE: f64 = 1080.0;

/// Emit one complete zig-zag traversal of the test area.
///
/// The path alternates between the two X turnaround positions at each
/// of the six Y levels without ever lifting, so the printed line stays
/// continuous: travel to the near top corner, drop Z to the first-layer
/// height, print the entry segment and the rest of the top row, then
/// for each remaining row a vertical step at the current X followed by
/// a full row to the opposite X. A final segment to the frame region's
/// top corner closes the pattern near its start.
///
/// One call produces the whole fixed-size sequence; commands must reach
/// the sink in this exact order or the physical path is corrupted.
pub fn meander(table: &MeanderTable, first_layer_z: f64) -> Vec<Command> {
    let mut commands = Vec::with_capacity(MEANDER_COMMAND_COUNT);

    commands.push(Move::NONE.x(table.x[1]).y(table.y[0]).into());
    commands.push(Move::NONE.z(first_layer_z).feedrate(Z_DROP_FEEDRATE).into());
    commands.push(Move::NONE.feedrate(PRINT_FEEDRATE).into());

    // Entry bead, then finish the top row with the shortened span.
    commands.push(Move::NONE.x(ENTRY_X).y(table.y[0]).e(ENTRY_E).into());
    commands.push(
        Move::NONE
            .x(table.x[0])
            .y(table.y[0])
            .e(table.extr_x_short)
            .into(),
    );

    // Remaining rows: vertical step at the current X, then a full row
    // to the opposite side. The alternation starts at the far X.
    let mut x = 0;
    for row in 1..6 {
        commands.push(
            Move::NONE
                .x(table.x[x])
                .y(table.y[row])
                .e(table.extr_y)
                .into(),
        );
        x = 1 - x;
        commands.push(
            Move::NONE
                .x(table.x[x])
                .y(table.y[row])
                .e(table.extr_x)
                .into(),
        );
    }

    commands.push(
        Move::NONE
            .x(BED_MARGIN)
            .y(FRAME_TOP_Y)
            .e(table.extr_line)
            .into(),
    );
    commands
}
