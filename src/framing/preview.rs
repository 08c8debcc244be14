use crate::errors::{ScanFrameError, ScanFrameResult};
use crate::framing::calculator::FramingRectCalculator;
use crate::framing::types::{DisplayMetrics, Rect, RectOfInterest};

/// Where a preview view reads its current display metrics from.
/// Implemented by the host over its platform display-metrics API.
pub trait MetricsSource {
    fn display_metrics(&self) -> ScanFrameResult<DisplayMetrics>;
}

/// Fixed metrics, for hosts that push values in on every layout pass.
#[derive(Debug, Clone, Copy)]
pub struct StaticMetrics(pub DisplayMetrics);

impl MetricsSource for StaticMetrics {
    fn display_metrics(&self) -> ScanFrameResult<DisplayMetrics> {
        Ok(self.0)
    }
}

/// Scan window state for one camera preview view.
///
/// Call `on_layout` whenever the host lays out (first show, rotation,
/// resize, keyboard frame change). The last good rect is kept for drawing
/// the overlay and for the decoder's rect of interest.
pub struct ScanWindow<S: MetricsSource> {
    calculator: FramingRectCalculator,
    source: S,
    framing_rect: Option<Rect>,
    metrics: Option<DisplayMetrics>,
}

impl<S: MetricsSource> ScanWindow<S> {
    pub fn new(calculator: FramingRectCalculator, source: S) -> Self {
        Self {
            calculator,
            source,
            framing_rect: None,
            metrics: None,
        }
    }

    pub fn with_default(source: S) -> Self {
        Self::new(FramingRectCalculator::default(), source)
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn framing_rect(&self) -> Option<Rect> {
        self.framing_rect
    }

    /// Recompute the framing rect from the current metrics. On error the
    /// previous rect is kept and the error is returned to the host.
    pub fn on_layout(&mut self) -> ScanFrameResult<Rect> {
        let metrics = self.source.display_metrics()?;
        let rect = self.calculator.compute(metrics.width_px, metrics.density)?;
        if self.framing_rect != Some(rect) {
            tracing::debug!(
                width_px = metrics.width_px,
                density = metrics.density,
                ?rect,
                "scan window relaid out"
            );
        }
        self.framing_rect = Some(rect);
        self.metrics = Some(metrics);
        Ok(rect)
    }

    /// Framing rect as fractions of the preview surface.
    pub fn rect_of_interest(
        &self,
        surface_width: i32,
        surface_height: i32,
    ) -> ScanFrameResult<RectOfInterest> {
        let rect = self.framing_rect.ok_or(ScanFrameError::NotLaidOut)?;
        rect.normalized(surface_width, surface_height)
    }

    /// Rect of interest for a preview that fills the display the last
    /// layout was measured on.
    pub fn display_rect_of_interest(&self) -> ScanFrameResult<RectOfInterest> {
        let metrics = self.metrics.ok_or(ScanFrameError::NotLaidOut)?;
        self.rect_of_interest(metrics.width_px, metrics.height_px)
    }
}
