//! Frame (contracting square) pattern generator.

use bedcal_gcode::{Command, Move};

use crate::extrusion::extrusion_length;
use crate::{CalibrationSettings, FRAME_LINE_LENGTH, FRAME_TOP_Y};

/// Number of passes a full frame takes.
pub const FRAME_PASSES: u8 = 16;

/// Far X edge of the frame region (mm).
const FRAME_FAR_X: f64 = 40.0;

/// Near X edge of the frame region (mm).
const FRAME_NEAR_X: f64 = 20.0;

/// Emit one pass of the contracting frame.
///
/// Each pass prints a pair of horizontal rows joined by one-line-width
/// vertical connectors, one line width lower than the previous pass, so
/// that sixteen sequential passes fill the frame region without gaps.
/// The generator is stateless: the caller owns the iteration index and
/// must invoke this with `i` from 0 to 15 inclusive, exactly once each,
/// in increasing order. The index is not range-checked; correctness
/// outside the contract is the caller's problem, not a raised fault.
pub fn frame_pass(settings: &CalibrationSettings, i: u8) -> [Command; 4] {
    let w = settings.line_width;
    let h = settings.layer_height;
    let extr_line = extrusion_length(h, w, FRAME_LINE_LENGTH - w);
    let extr_step = extrusion_length(h, w, w);
    let i = f64::from(i);

    let upper_y = FRAME_TOP_Y - i * 2.0 * w;
    let lower_y = FRAME_TOP_Y - (2.0 * i + 1.0) * w;
    let exit_y = FRAME_TOP_Y - (i + 1.0) * 2.0 * w;

    [
        Move::NONE.x(FRAME_FAR_X).y(upper_y).e(extr_line).into(),
        Move::NONE.y(lower_y).e(extr_step).into(),
        Move::NONE.x(FRAME_NEAR_X).y(lower_y).e(extr_line).into(),
        Move::NONE.y(exit_y).e(extr_step).into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn pass_ys(settings: &CalibrationSettings, i: u8) -> Vec<f64> {
        frame_pass(settings, i)
            .iter()
            .filter_map(|c| c.as_move().and_then(|m| m.y))
            .collect()
    }

    #[test]
    fn test_first_pass_literal() {
        let settings = CalibrationSettings::default();
        let pass = frame_pass(&settings, 0);

        let first = pass[0].as_move().unwrap();
        assert_eq!(first.x, Some(40.0));
        assert_eq!(first.y, Some(35.0));
        assert!(first.e.unwrap() > 0.0);

        let ys = pass_ys(&settings, 0);
        assert_abs_diff_eq!(ys[1], 34.6, epsilon = 1e-9);
        assert_abs_diff_eq!(ys[3], 34.2, epsilon = 1e-9);
    }

    #[test]
    fn test_last_pass_literal() {
        let settings = CalibrationSettings::default();
        let ys = pass_ys(&settings, 15);
        assert_abs_diff_eq!(ys[0], 23.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ys[1], 22.6, epsilon = 1e-9);
        assert_abs_diff_eq!(ys[2], 22.6, epsilon = 1e-9);
        assert_abs_diff_eq!(ys[3], 22.2, epsilon = 1e-9);
    }

    #[test]
    fn test_pattern_contracts_monotonically() {
        let settings = CalibrationSettings::default();
        for i in 0..FRAME_PASSES - 1 {
            let current = pass_ys(&settings, i);
            let next = pass_ys(&settings, i + 1);
            for (a, b) in current.iter().zip(&next) {
                assert!(b < a, "pass {} does not contract", i + 1);
            }
        }
    }

    #[test]
    fn test_passes_chain_without_gaps() {
        // The exit Y of pass i is the entry Y of pass i+1.
        let settings = CalibrationSettings::default();
        for i in 0..FRAME_PASSES - 1 {
            let exit = pass_ys(&settings, i)[3];
            let entry = pass_ys(&settings, i + 1)[0];
            assert_abs_diff_eq!(exit, entry, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_horizontal_rows_use_full_line_extrusion() {
        let settings = CalibrationSettings::default();
        let pass = frame_pass(&settings, 7);
        let row = pass[0].as_move().unwrap().e.unwrap();
        let step = pass[1].as_move().unwrap().e.unwrap();
        assert!(row > step);
        assert_abs_diff_eq!(
            row,
            extrusion_length(0.2, 0.4, 19.6),
            epsilon = 1e-12
        );
    }
}
