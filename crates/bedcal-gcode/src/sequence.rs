//! Fixed setup and intro command sequences.
//!
//! These tables bracket the computed patterns: wait for preheat, load
//! filament, pick a flow rate for the nozzle, purge an intro line and
//! switch the machine into the state the meander expects. They are
//! ordered data, not computed geometry; emission order is table order.

use crate::command::{Command, Move};

/// Commands run while waiting for preheat: fan off, wait for the bed
/// and nozzle to reach their targets, status message, home, reset the
/// extruder distance counter.
pub const PREHEAT: &[Command] = &[
    Command::Raw("M107"),
    Command::Raw("M190"),
    Command::Raw("M109"),
    Command::Raw("M117 First layer calibration"),
    Command::Raw("G28"),
    Command::Raw("G92 E0.0"),
];

/// Preamble for the meander: reset E, millimeter units, absolute
/// coordinates with relative extrusion, a small retract, Z hop,
/// acceleration limit and travel feedrate.
pub const BEFORE_MEANDER: &[Command] = &[
    Command::Raw("G92 E0.0"),
    Command::Raw("G21"),
    Command::Raw("G90"),
    Command::Raw("M83"),
    Command::Move(Move::NONE.e(-1.5).feedrate(2100.0)),
    Command::Move(Move::NONE.z(5.0).feedrate(7200.0)),
    Command::Raw("M204 S1000"),
    Command::Move(Move::NONE.feedrate(4000.0)),
];

/// Intro purge line for multi-material machines.
const INTRO_MMU: &[Command] = &[
    Command::Move(Move::NONE.x(55.0).e(32.0).feedrate(1073.0)),
    Command::Move(Move::NONE.x(5.0).e(32.0).feedrate(1800.0)),
    Command::Move(Move::NONE.x(55.0).e(8.0).feedrate(2000.0)),
    Command::Move(Move::NONE.z(0.3).feedrate(1000.0)),
    Command::Raw("G92 E0.0"),
    Command::Move(Move::NONE.x(240.0).e(25.0).feedrate(2200.0)),
    Command::Move(Move::NONE.y(-2.0).feedrate(1000.0)),
    Command::Move(Move::NONE.x(55.0).e(25.0).feedrate(1400.0)),
    Command::Move(Move::NONE.z(0.2).feedrate(1000.0)),
    Command::Move(Move::NONE.x(5.0).e(4.0).feedrate(1000.0)),
];

/// Intro purge line for single-material machines.
const INTRO_SINGLE: &[Command] = &[
    Command::Move(Move::NONE.x(60.0).e(9.0).feedrate(1000.0)),
    Command::Move(Move::NONE.x(100.0).e(12.5).feedrate(1000.0)),
];

/// The intro purge line for the given machine configuration.
pub fn intro_line(mmu: bool) -> &'static [Command] {
    if mmu {
        INTRO_MMU
    } else {
        INTRO_SINGLE
    }
}

/// Filament load sequence. Only multi-material machines need one;
/// returns an empty batch otherwise.
pub fn load_filament(mmu: bool, filament: u8) -> Vec<Command> {
    if !mmu {
        return Vec::new();
    }
    vec![
        Command::Raw("M83"),
        Command::Move(Move::NONE.y(-3.0).feedrate(1000.0)),
        Command::Move(Move::NONE.z(0.4).feedrate(1000.0)),
        Command::Tool(filament),
    ]
}

/// Flow-rate command (`M221`) selected by nozzle diameter. Unknown
/// diameters fall back to 100%.
pub fn flow_rate(nozzle_diameter: f64) -> Command {
    // Keyed on hundredths of a millimeter to avoid float matching.
    match (nozzle_diameter * 100.0).round() as u32 {
        25 => Command::Raw("M221 S62"),
        40 => Command::Raw("M221 S100"),
        60 => Command::Raw("M221 S150"),
        80 => Command::Raw("M221 S200"),
        _ => Command::Raw("M221 S100"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preheat_order() {
        assert_eq!(PREHEAT.first(), Some(&Command::Raw("M107")));
        assert_eq!(PREHEAT.last(), Some(&Command::Raw("G92 E0.0")));
        assert_eq!(PREHEAT.len(), 6);
    }

    #[test]
    fn test_intro_line_variants() {
        assert_eq!(intro_line(true).len(), 10);
        assert_eq!(intro_line(false).len(), 2);
    }

    #[test]
    fn test_load_filament_single_material_is_empty() {
        assert!(load_filament(false, 0).is_empty());
    }

    #[test]
    fn test_load_filament_mmu_ends_with_tool_change() {
        let cmds = load_filament(true, 2);
        assert_eq!(cmds.last(), Some(&Command::Tool(2)));
    }

    #[test]
    fn test_flow_rate_table() {
        assert_eq!(flow_rate(0.25), Command::Raw("M221 S62"));
        assert_eq!(flow_rate(0.4), Command::Raw("M221 S100"));
        assert_eq!(flow_rate(0.6), Command::Raw("M221 S150"));
        assert_eq!(flow_rate(0.8), Command::Raw("M221 S200"));
        assert_eq!(flow_rate(0.35), Command::Raw("M221 S100"));
    }

    #[test]
    fn test_before_meander_ends_with_travel_feedrate() {
        let last = BEFORE_MEANDER.last().and_then(Command::as_move).unwrap();
        assert_eq!(last.feedrate, Some(4000.0));
        assert!(last.is_travel());
    }
}
