//! Printer profile definitions.

use serde::{Deserialize, Serialize};

/// Printer profile with machine-specific settings.
///
/// Carries the configuration the calibration routine reads: bed travel
/// bounds, nozzle diameter (selects the flow-rate command) and whether
/// a multi-material unit is fitted (selects the intro sequence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterProfile {
    /// Profile name.
    pub name: String,
    /// Maximum X travel (mm).
    pub bed_x: f64,
    /// Maximum Y travel (mm).
    pub bed_y: f64,
    /// Nozzle diameter (mm).
    pub nozzle_diameter: f64,
    /// Filament diameter (mm).
    pub filament_diameter: f64,
    /// Is a multi-material unit fitted?
    pub mmu: bool,
}

impl Default for PrinterProfile {
    fn default() -> Self {
        Self::mk3()
    }
}

impl PrinterProfile {
    /// Generic 220x220 single-material machine.
    pub fn generic() -> Self {
        Self {
            name: "Generic".into(),
            bed_x: 220.0,
            bed_y: 220.0,
            nozzle_diameter: 0.4,
            filament_diameter: 1.75,
            mmu: false,
        }
    }

    /// The 250x210 reference machine the calibration geometry was
    /// tuned on.
    pub fn mk3() -> Self {
        Self {
            name: "MK3-class".into(),
            bed_x: 250.0,
            bed_y: 210.0,
            nozzle_diameter: 0.4,
            filament_diameter: 1.75,
            mmu: false,
        }
    }

    /// Check that an XY position is within the bed travel bounds.
    pub fn in_bounds(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x <= self.bed_x && y >= 0.0 && y <= self.bed_y
    }
}
