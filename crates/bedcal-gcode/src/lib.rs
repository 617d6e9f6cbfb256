#![warn(missing_docs)]

//! G-code command representation for the bedcal calibration generator.
//!
//! This crate owns everything about the *textual* side of the
//! calibration routine: the `G1` move formatter, printer profiles, and
//! the fixed setup/intro command tables. Pattern generators in
//! `bedcal-patterns` produce [`Command`] values; the emission layer
//! renders them with `Display` and never parses them back.
//!
//! # Example
//!
//! ```
//! use bedcal_gcode::{Command, Move};
//!
//! let cmd = Command::Move(Move::NONE.x(20.0).y(35.0).e(0.652));
//! assert_eq!(cmd.to_string(), "G1 X20.00 Y35.00 E0.652");
//! ```

pub mod command;
pub mod printer;
pub mod sequence;

pub use command::{Command, Move};
pub use printer::PrinterProfile;
