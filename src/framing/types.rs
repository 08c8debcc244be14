use serde::{Deserialize, Serialize};

use crate::errors::{ScanFrameError, ScanFrameResult};

/// Scan window in physical pixels, edges exclusive on the right/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> i32 {
        (self.left + self.right) / 2
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Express this rect as fractions of a `surface_width` x `surface_height`
    /// surface, clipped to the surface.
    pub fn normalized(
        &self,
        surface_width: i32,
        surface_height: i32,
    ) -> ScanFrameResult<RectOfInterest> {
        if surface_width <= 0 || surface_height <= 0 {
            return Err(ScanFrameError::InvalidArgument(format!(
                "surface must be non-empty, got {surface_width}x{surface_height}"
            )));
        }
        let sw = surface_width as f64;
        let sh = surface_height as f64;
        let x1 = (self.left as f64 / sw).clamp(0.0, 1.0);
        let y1 = (self.top as f64 / sh).clamp(0.0, 1.0);
        let x2 = (self.right as f64 / sw).clamp(0.0, 1.0);
        let y2 = (self.bottom as f64 / sh).clamp(0.0, 1.0);
        Ok(RectOfInterest {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        })
    }
}

/// Framing rect relative to the preview surface, all fields in 0.0–1.0.
/// Decoders take this to skip analysis outside the scan window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectOfInterest {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Display metrics as reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    pub width_px: i32,
    pub height_px: i32,
    /// Physical pixels per browser pixel.
    pub density: f64,
}

impl DisplayMetrics {
    pub fn new(width_px: i32, height_px: i32, density: f64) -> Self {
        Self {
            width_px,
            height_px,
            density,
        }
    }
}

/// Side of the web breakpoint a container falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutBranch {
    /// Container at or below the breakpoint: window spans the width minus margins.
    Narrow,
    /// Container wider than the breakpoint: fixed window width, large header.
    Wide,
}
