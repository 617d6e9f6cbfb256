//! Constant-volume extrusion model.

use std::f64::consts::PI;

/// Nominal filament diameter (mm).
pub const FILAMENT_DIAMETER: f64 = 1.75;

/// Cross-sectional area of the nominal filament (mm²).
pub const FILAMENT_CROSS_SECTION: f64 =
    PI * (FILAMENT_DIAMETER / 2.0) * (FILAMENT_DIAMETER / 2.0);

/// Filament feed length needed to deposit one line segment.
///
/// The printed bead is approximated as a `layer_height` × `line_width`
/// rectangle; its volume over `segment_length` must equal the filament
/// volume fed, so `e = segment_length · layer_height · line_width /
/// cross_section`. Pure and deterministic; no rounding (formatting
/// precision belongs to the emission layer). A zero `segment_length`
/// yields zero, which is valid for travel-like transitions. Negative
/// height/width are a caller contract violation and are not checked:
/// both originate from fixed configuration, not runtime input.
pub fn extrusion_length(layer_height: f64, line_width: f64, segment_length: f64) -> f64 {
    segment_length * layer_height * line_width / FILAMENT_CROSS_SECTION
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_segment_extrudes_nothing() {
        assert_eq!(extrusion_length(0.2, 0.4, 0.0), 0.0);
    }

    #[test]
    fn test_reference_line() {
        // 19.6mm line at 0.2 x 0.4 bead.
        let e = extrusion_length(0.2, 0.4, 19.6);
        assert_relative_eq!(e, 0.65190, max_relative = 1e-4);
    }

    #[test]
    fn test_nonnegative_for_valid_inputs() {
        for len in [0.0, 0.4, 19.6, 209.6] {
            assert!(extrusion_length(0.2, 0.4, len) >= 0.0);
        }
    }

    #[test]
    fn test_monotonic_in_each_input() {
        let base = extrusion_length(0.2, 0.4, 20.0);
        assert!(extrusion_length(0.3, 0.4, 20.0) > base);
        assert!(extrusion_length(0.2, 0.5, 20.0) > base);
        assert!(extrusion_length(0.2, 0.4, 25.0) > base);
    }

    #[test]
    fn test_volume_conservation() {
        // Bead volume equals filament volume fed.
        let (h, w, len) = (0.2, 0.4, 50.0);
        let e = extrusion_length(h, w, len);
        assert_relative_eq!(e * FILAMENT_CROSS_SECTION, h * w * len, max_relative = 1e-12);
    }
}
