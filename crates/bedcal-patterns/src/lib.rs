#![warn(missing_docs)]

//! First-layer (Z-offset) calibration pattern generators.
//!
//! This crate computes the motion/extrusion command sequences for the
//! two test patterns an operator uses to judge nozzle-to-bed distance:
//! a continuous zig-zag meander covering the printable test area, and a
//! contracting rectangular frame printed one pass per call.
//!
//! # Example
//!
//! ```
//! use bedcal_patterns::{frame_pass, meander, CalibrationSettings, MeanderTable};
//!
//! let settings = CalibrationSettings::default();
//! settings.validate()?;
//!
//! let table = MeanderTable::new(&settings);
//! let commands = meander(&table, settings.first_layer_z);
//! assert_eq!(commands.len(), bedcal_patterns::MEANDER_COMMAND_COUNT);
//!
//! // The frame contracts one line width per pass; the caller owns the
//! // counter and must run all 16 passes in order.
//! for i in 0..16 {
//!     let _pass = frame_pass(&settings, i);
//! }
//! # Ok::<(), bedcal_patterns::PatternError>(())
//! ```

pub mod error;
pub mod extrusion;
pub mod frame;
pub mod meander;
pub mod table;

pub use error::{PatternError, Result};
pub use extrusion::{extrusion_length, FILAMENT_CROSS_SECTION, FILAMENT_DIAMETER};
pub use frame::{frame_pass, FRAME_PASSES};
pub use meander::{meander, MEANDER_COMMAND_COUNT};
pub use table::MeanderTable;

use serde::{Deserialize, Serialize};

/// Distance kept clear of the bed edges (mm).
pub const BED_MARGIN: f64 = 20.0;

/// Y level the meander descends to; the frame region sits below it (mm).
pub const MEANDER_FLOOR_Y: f64 = 55.0;

/// Top Y of the frame region; also the meander's exit target (mm).
pub const FRAME_TOP_Y: f64 = 35.0;

/// Nominal X extent of one frame line (mm).
pub const FRAME_LINE_LENGTH: f64 = 20.0;

/// Calibration geometry parameters, constant for the lifetime of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationSettings {
    /// Maximum X travel of the bed (mm).
    pub bed_x: f64,
    /// Maximum Y travel of the bed (mm).
    pub bed_y: f64,
    /// Printed line width (mm).
    pub line_width: f64,
    /// Layer height used by the extrusion model (mm).
    pub layer_height: f64,
    /// Z height the nozzle drops to for the first layer (mm).
    pub first_layer_z: f64,
}

impl Default for CalibrationSettings {
    fn default() -> Self {
        Self {
            bed_x: 250.0,
            bed_y: 210.0,
            line_width: 0.4,
            layer_height: 0.2,
            first_layer_z: 0.15,
        }
    }
}

impl CalibrationSettings {
    /// Validate settings.
    ///
    /// Rejects non-positive dimensions and a bed too small to hold the
    /// meander's six rows. The generators themselves do not re-check:
    /// skipping validation on a too-small bed silently produces a
    /// degenerate (non-monotonic) pattern.
    pub fn validate(&self) -> Result<()> {
        if self.bed_x <= 0.0 || self.bed_y <= 0.0 {
            return Err(PatternError::InvalidSettings(
                "bed dimensions must be positive".into(),
            ));
        }
        if self.line_width <= 0.0 {
            return Err(PatternError::InvalidSettings(
                "line_width must be positive".into(),
            ));
        }
        if self.layer_height <= 0.0 {
            return Err(PatternError::InvalidSettings(
                "layer_height must be positive".into(),
            ));
        }
        if self.first_layer_z <= 0.0 {
            return Err(PatternError::InvalidSettings(
                "first_layer_z must be positive".into(),
            ));
        }
        let usable_y = (self.bed_y - BED_MARGIN) - MEANDER_FLOOR_Y;
        if usable_y <= 5.0 * self.line_width {
            return Err(PatternError::InvalidSettings(format!(
                "bed too small for the meander: {:.1}mm of Y span for six rows",
                usable_y
            )));
        }
        Ok(())
    }
}
