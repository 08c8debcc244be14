//! Browser-px to physical-px conversion.
//!
//! Rounds half away from zero. Every length converted here is non-negative,
//! so this agrees with `floor(x + 0.5)` on the native side.
use crate::errors::{ScanFrameError, ScanFrameResult};

pub fn to_physical(browser_px: f64, density: f64) -> i32 {
    (browser_px * density).round() as i32
}

pub fn validate_inputs(container_width_px: i32, density: f64) -> ScanFrameResult<()> {
    if container_width_px <= 0 {
        return Err(ScanFrameError::InvalidArgument(format!(
            "container width must be positive, got {container_width_px}"
        )));
    }
    if !density.is_finite() || density <= 0.0 {
        return Err(ScanFrameError::InvalidArgument(format!(
            "display density must be a positive finite number, got {density}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_physical_rounds_half_up() {
        assert_eq!(to_physical(600.0, 2.0), 1200);
        assert_eq!(to_physical(16.0, 1.5), 24);
        // 600 * 0.75 = 450; 48 * 2.625 = 126; 60 * 1.3125 = 78.75
        assert_eq!(to_physical(600.0, 0.75), 450);
        assert_eq!(to_physical(48.0, 2.625), 126);
        assert_eq!(to_physical(60.0, 1.3125), 79);
        // 1 * 2.5 ties away from zero
        assert_eq!(to_physical(1.0, 2.5), 3);
    }

    #[test]
    fn test_validate_inputs() {
        assert!(validate_inputs(1080, 2.75).is_ok());
        assert!(validate_inputs(0, 2.0).is_err());
        assert!(validate_inputs(-5, 2.0).is_err());
        assert!(validate_inputs(1080, 0.0).is_err());
        assert!(validate_inputs(1080, -1.0).is_err());
        assert!(validate_inputs(1080, f64::NAN).is_err());
        assert!(validate_inputs(1080, f64::INFINITY).is_err());
    }
}
