pub mod config;
pub mod errors;
pub mod ffi;
pub mod framing;

pub use config::{DegeneratePolicy, LayoutConfig};
pub use errors::{ScanFrameError, ScanFrameResult};
pub use framing::{
    compute_framing_rect, DisplayMetrics, FramingRectCalculator, LayoutBranch, MetricsSource,
    Rect, RectOfInterest, ScanWindow, StaticMetrics,
};

/// Install a `tracing` subscriber for hosts that don't bring their own.
/// Honors `RUST_LOG`, defaulting to `info`. A second call is a no-op.
pub fn init_tracing() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
    if result.is_ok() {
        tracing::debug!("tracing initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
        assert!(compute_framing_rect(600, 1.0).is_ok());
    }
}
