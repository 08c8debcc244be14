pub mod calculator;
pub mod preview;
pub mod types;
pub mod units;

pub use calculator::{compute_framing_rect, FramingRectCalculator};
pub use preview::{MetricsSource, ScanWindow, StaticMetrics};
pub use types::{DisplayMetrics, LayoutBranch, Rect, RectOfInterest};
