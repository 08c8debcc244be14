//! Framing rectangle for the camera preview.
//!
//! Mirrors the web app's CSS media query at the width breakpoint:
//!
//! 1. container width > breakpoint (physical px):
//!    window width  = (breakpoint - 2 * side margin) * density
//!    window top    = large header * density
//!    window left   = (container width - window width) / 2
//!
//! 2. container width <= breakpoint:
//!    window width  = container width - 2 * side margin * density
//!    window top    = small header * density
//!    window left   = side margin * density (same centring formula)
//!
//! The window height is always half its width.
use crate::config::{DegeneratePolicy, LayoutConfig};
use crate::errors::{ScanFrameError, ScanFrameResult};
use crate::framing::types::{LayoutBranch, Rect};
use crate::framing::units::{to_physical, validate_inputs};

#[derive(Debug, Clone, Default)]
pub struct FramingRectCalculator {
    config: LayoutConfig,
}

impl FramingRectCalculator {
    pub fn new(config: LayoutConfig) -> ScanFrameResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Which side of the breakpoint `container_width_px` is on at `density`.
    pub fn branch(&self, container_width_px: i32, density: f64) -> ScanFrameResult<LayoutBranch> {
        validate_inputs(container_width_px, density)?;
        Ok(self.branch_unchecked(container_width_px, density))
    }

    fn branch_unchecked(&self, container_width_px: i32, density: f64) -> LayoutBranch {
        let breakpoint_px = to_physical(self.config.width_breakpoint as f64, density);
        if container_width_px <= breakpoint_px {
            LayoutBranch::Narrow
        } else {
            LayoutBranch::Wide
        }
    }

    pub fn compute(&self, container_width_px: i32, density: f64) -> ScanFrameResult<Rect> {
        validate_inputs(container_width_px, density)?;
        let cfg = &self.config;

        let breakpoint_px = to_physical(cfg.width_breakpoint as f64, density);
        let min_width = breakpoint_px.min(container_width_px);
        let margins_px = to_physical(cfg.side_margins as f64 * 2.0, density);
        let mut rect_width = min_width.saturating_sub(margins_px);
        let mut rect_height = rect_width / 2;

        if rect_width <= 0 || rect_height <= 0 {
            match cfg.degenerate_policy {
                DegeneratePolicy::Fail => {
                    return Err(ScanFrameError::DegenerateLayout {
                        width: rect_width,
                        height: rect_height,
                    });
                }
                DegeneratePolicy::Clamp => {
                    tracing::warn!(
                        container_width_px,
                        density,
                        rect_width,
                        rect_height,
                        "scan window collapsed; clamping to minimum size"
                    );
                    rect_width = rect_width.max(1);
                    rect_height = (rect_width / 2).max(1);
                }
            }
        }

        let left = (container_width_px - rect_width) / 2;
        let right = left + rect_width;

        let branch = self.branch_unchecked(container_width_px, density);
        let header = match branch {
            LayoutBranch::Narrow => cfg.header_height_small,
            LayoutBranch::Wide => cfg.header_height_large,
        };
        let top = to_physical(header as f64, density);
        let bottom = top.checked_add(rect_height).ok_or_else(|| {
            ScanFrameError::InvalidArgument(format!(
                "display density {density} puts the scan window out of pixel range"
            ))
        })?;

        let rect = Rect::new(left, top, right, bottom);
        tracing::trace!(
            container_width_px,
            density,
            ?branch,
            ?rect,
            "framing rect computed"
        );
        Ok(rect)
    }
}

/// Framing rect for the default web layout.
pub fn compute_framing_rect(container_width_px: i32, density: f64) -> ScanFrameResult<Rect> {
    FramingRectCalculator::default().compute(container_width_px, density)
}
