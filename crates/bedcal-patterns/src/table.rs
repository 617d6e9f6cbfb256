//! Meander geometry table.

use crate::extrusion::extrusion_length;
use crate::{CalibrationSettings, BED_MARGIN, FRAME_LINE_LENGTH, MEANDER_FLOOR_Y};

/// Precomputed meander geometry: the two X turnaround positions, the
/// six Y row levels, the horizontal/vertical span lengths and their
/// extrusion amounts.
///
/// Computed once from the calibration settings and read-only
/// thereafter; reconstruction from identical settings is bit-identical.
/// No guarding happens here — a bed rejected by
/// [`CalibrationSettings::validate`] yields a degenerate table.
#[derive(Debug, Clone, PartialEq)]
pub struct MeanderTable {
    /// X turnaround positions, far edge first.
    pub x: [f64; 2],
    /// Row Y levels, strictly decreasing from the top of the test area.
    pub y: [f64; 6],
    /// Vertical distance between adjacent rows (mm).
    pub y_pitch: f64,
    /// Full horizontal span of one row (mm).
    pub span_x: f64,
    /// Horizontal span remaining after the entry segment (mm).
    pub span_x_short: f64,
    /// Extrusion for a full horizontal row.
    pub extr_x: f64,
    /// Extrusion for one vertical row step.
    pub extr_y: f64,
    /// Extrusion for the shortened first row.
    pub extr_x_short: f64,
    /// Extrusion for a single nominal-length line.
    pub extr_line: f64,
}

impl MeanderTable {
    /// Compute the table from bed bounds and line geometry.
    pub fn new(settings: &CalibrationSettings) -> Self {
        let x_far = settings.bed_x - BED_MARGIN;
        let x_near = BED_MARGIN;
        let y_top = settings.bed_y - BED_MARGIN;
        let y_pitch = (y_top - MEANDER_FLOOR_Y) / 5.0 - settings.line_width;

        let mut y = [0.0; 6];
        for (k, level) in y.iter_mut().enumerate() {
            *level = y_top - k as f64 * y_pitch;
        }

        let span_x = x_far - x_near - settings.line_width;
        let span_x_short = span_x - 50.0;

        let h = settings.layer_height;
        let w = settings.line_width;
        Self {
            x: [x_far, x_near],
            y,
            y_pitch,
            span_x,
            span_x_short,
            extr_x: extrusion_length(h, w, span_x),
            extr_y: extrusion_length(h, w, y_pitch),
            extr_x_short: extrusion_length(h, w, span_x_short),
            extr_line: extrusion_length(h, w, FRAME_LINE_LENGTH - w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_geometry() {
        // 250x210 bed at 0.4mm line width.
        let table = MeanderTable::new(&CalibrationSettings::default());
        assert_eq!(table.x, [230.0, 20.0]);
        assert_abs_diff_eq!(table.y_pitch, 26.6, epsilon = 1e-9);

        let expected_y = [190.0, 163.4, 136.8, 110.2, 83.6, 57.0];
        for (level, expected) in table.y.iter().zip(expected_y) {
            assert_abs_diff_eq!(*level, expected, epsilon = 1e-9);
        }

        assert_abs_diff_eq!(table.span_x, 209.6, epsilon = 1e-9);
        assert_abs_diff_eq!(table.span_x_short, 159.6, epsilon = 1e-9);
    }

    #[test]
    fn test_y_levels_strictly_decreasing() {
        let table = MeanderTable::new(&CalibrationSettings::default());
        for pair in table.y.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_x_positions_ordered() {
        let table = MeanderTable::new(&CalibrationSettings::default());
        assert!(table.x[0] > table.x[1]);
        assert!(table.span_x_short < table.span_x);
    }

    #[test]
    fn test_extrusions_positive() {
        let table = MeanderTable::new(&CalibrationSettings::default());
        assert!(table.extr_x > 0.0);
        assert!(table.extr_y > 0.0);
        assert!(table.extr_x_short > 0.0);
        assert!(table.extr_line > 0.0);
    }

    #[test]
    fn test_reconstruction_bit_identical() {
        let settings = CalibrationSettings::default();
        assert_eq!(MeanderTable::new(&settings), MeanderTable::new(&settings));
    }
}
