//! Motion command types and their text rendering.

use std::fmt;

/// A single `G1` motion/extrusion command.
///
/// Every field is optional; omitted axes produce no word. Axis words
/// render in `X Y Z E F` order with two decimals for positions, three
/// for extrusion and none for feedrate. Precision is applied here and
/// only here; generators hand over unrounded values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Move {
    /// Target X position (mm).
    pub x: Option<f64>,
    /// Target Y position (mm).
    pub y: Option<f64>,
    /// Target Z position (mm).
    pub z: Option<f64>,
    /// Filament to extrude over the move (mm, relative).
    pub e: Option<f64>,
    /// Feedrate (mm/min).
    pub feedrate: Option<f64>,
}

impl Move {
    /// A move with no axis words set.
    pub const NONE: Move = Move {
        x: None,
        y: None,
        z: None,
        e: None,
        feedrate: None,
    };

    /// Set the target X position.
    pub const fn x(self, v: f64) -> Self {
        Move { x: Some(v), ..self }
    }

    /// Set the target Y position.
    pub const fn y(self, v: f64) -> Self {
        Move { y: Some(v), ..self }
    }

    /// Set the target Z position.
    pub const fn z(self, v: f64) -> Self {
        Move { z: Some(v), ..self }
    }

    /// Set the extrusion amount.
    pub const fn e(self, v: f64) -> Self {
        Move { e: Some(v), ..self }
    }

    /// Set the feedrate.
    pub const fn feedrate(self, v: f64) -> Self {
        Move {
            feedrate: Some(v),
            ..self
        }
    }

    /// Is this a travel move (no extrusion)?
    pub fn is_travel(&self) -> bool {
        self.e.is_none()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("G1")?;
        if let Some(x) = self.x {
            write!(f, " X{:.2}", x)?;
        }
        if let Some(y) = self.y {
            write!(f, " Y{:.2}", y)?;
        }
        if let Some(z) = self.z {
            write!(f, " Z{:.2}", z)?;
        }
        if let Some(e) = self.e {
            write!(f, " E{:.3}", e)?;
        }
        if let Some(feedrate) = self.feedrate {
            write!(f, " F{:.0}", feedrate)?;
        }
        Ok(())
    }
}

/// One command line handed to the emission sink.
///
/// Produced, never parsed. Ownership transfers to the sink on emit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// A formatted `G1` move.
    Move(Move),
    /// A verbatim line, used for fixed setup codes (`M107`, `G28`, ...).
    Raw(&'static str),
    /// Tool change (`T<n>`).
    Tool(u8),
}

impl Command {
    /// The move payload, if this is a motion command.
    pub fn as_move(&self) -> Option<&Move> {
        match self {
            Command::Move(m) => Some(m),
            _ => None,
        }
    }
}

impl From<Move> for Command {
    fn from(m: Move) -> Self {
        Command::Move(m)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move(m) => m.fmt(f),
            Command::Raw(line) => f.write_str(line),
            Command::Tool(n) => write!(f, "T{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_axis_order_and_precision() {
        let m = Move::NONE.x(230.0).y(163.4).e(0.8847);
        assert_eq!(m.to_string(), "G1 X230.00 Y163.40 E0.885");
    }

    #[test]
    fn test_move_omits_unset_axes() {
        let m = Move::NONE.z(0.15).feedrate(7200.0);
        assert_eq!(m.to_string(), "G1 Z0.15 F7200");
    }

    #[test]
    fn test_feedrate_only() {
        assert_eq!(Move::NONE.feedrate(1080.0).to_string(), "G1 F1080");
    }

    #[test]
    fn test_travel_detection() {
        assert!(Move::NONE.x(20.0).y(190.0).is_travel());
        assert!(!Move::NONE.x(70.0).e(5.0).is_travel());
    }

    #[test]
    fn test_raw_and_tool_render() {
        assert_eq!(Command::Raw("G92 E0.0").to_string(), "G92 E0.0");
        assert_eq!(Command::Tool(3).to_string(), "T3");
    }

    #[test]
    fn test_negative_positions_render_signed() {
        let m = Move::NONE.y(-3.0).feedrate(1000.0);
        assert_eq!(m.to_string(), "G1 Y-3.00 F1000");
    }
}
