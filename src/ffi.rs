//! C ABI for native camera views (Android JNI shims, Swift).
//!
//! Values only cross the boundary; there is nothing to free.

use crate::errors::ScanFrameError;
use crate::framing::compute_framing_rect;

pub const SCANFRAME_OK: i32 = 0;
pub const SCANFRAME_INVALID_ARGUMENT: i32 = 1;
pub const SCANFRAME_DEGENERATE_LAYOUT: i32 = 2;
pub const SCANFRAME_ERROR: i32 = 3;

/// Framing rect plus a status code. Edges are zero unless `status` is `SCANFRAME_OK`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanFrameRect {
    pub status: i32,
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ScanFrameRect {
    fn failed(status: i32) -> Self {
        Self {
            status,
            left: 0,
            top: 0,
            right: 0,
            bottom: 0,
        }
    }
}

/// Compute the framing rect for the default web layout.
///
/// `container_width_px` is the physical screen width, `density` the
/// display's physical pixels per browser pixel.
#[no_mangle]
pub extern "C" fn scanframe_compute(container_width_px: i32, density: f64) -> ScanFrameRect {
    match compute_framing_rect(container_width_px, density) {
        Ok(rect) => ScanFrameRect {
            status: SCANFRAME_OK,
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        },
        Err(e) => {
            tracing::error!(
                error = %e,
                container_width_px,
                density,
                "scanframe_compute failed"
            );
            let status = match e {
                ScanFrameError::InvalidArgument(_) => SCANFRAME_INVALID_ARGUMENT,
                ScanFrameError::DegenerateLayout { .. } => SCANFRAME_DEGENERATE_LAYOUT,
                _ => SCANFRAME_ERROR,
            };
            ScanFrameRect::failed(status)
        }
    }
}
