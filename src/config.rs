use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ScanFrameError, ScanFrameResult};

// Web app layout, in browser px.
pub const DEFAULT_HEADER_HEIGHT_LARGE: i32 = 60;
pub const DEFAULT_HEADER_HEIGHT_SMALL: i32 = 48;
pub const DEFAULT_SIDE_MARGINS: i32 = 16;
/// Above this container width the scan window width is fixed.
pub const DEFAULT_WIDTH_BREAKPOINT: i32 = 600;

/// What to do when the margins eat the whole container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Shrink to a 1 px window centred in the container.
    #[default]
    Clamp,
    /// Report `ScanFrameError::DegenerateLayout`.
    Fail,
}

/// Layout contract shared with the web app. All lengths are browser px.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Header height used above the breakpoint.
    pub header_height_large: i32,
    /// Header height used at or below the breakpoint.
    pub header_height_small: i32,
    /// Margin on each side of the scan window.
    pub side_margins: i32,
    pub width_breakpoint: i32,
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_height_large: DEFAULT_HEADER_HEIGHT_LARGE,
            header_height_small: DEFAULT_HEADER_HEIGHT_SMALL,
            side_margins: DEFAULT_SIDE_MARGINS,
            width_breakpoint: DEFAULT_WIDTH_BREAKPOINT,
            degenerate_policy: DegeneratePolicy::Clamp,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> ScanFrameResult<()> {
        let lengths = [
            ("header_height_large", self.header_height_large),
            ("header_height_small", self.header_height_small),
            ("side_margins", self.side_margins),
            ("width_breakpoint", self.width_breakpoint),
        ];
        for (name, value) in lengths {
            if value <= 0 {
                return Err(ScanFrameError::Config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML layout. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> ScanFrameResult<Self> {
        let config: LayoutConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

pub fn load_config(path: &Path) -> ScanFrameResult<LayoutConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = LayoutConfig::from_toml_str(&content)?;
    tracing::info!(
        path = %path.display(),
        breakpoint = config.width_breakpoint,
        "layout config loaded"
    );
    Ok(config)
}

pub fn save_config(config: &LayoutConfig, path: &Path) -> ScanFrameResult<()> {
    config.validate()?;
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "layout config saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_web_layout() {
        let config = LayoutConfig::default();
        assert_eq!(config.header_height_large, 60);
        assert_eq!(config.header_height_small, 48);
        assert_eq!(config.side_margins, 16);
        assert_eq!(config.width_breakpoint, 600);
        assert_eq!(config.degenerate_policy, DegeneratePolicy::Clamp);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LayoutConfig::from_toml_str(
            "width_breakpoint = 720\ndegenerate_policy = \"fail\"\n",
        )
        .unwrap();
        assert_eq!(config.width_breakpoint, 720);
        assert_eq!(config.degenerate_policy, DegeneratePolicy::Fail);
        assert_eq!(config.side_margins, DEFAULT_SIDE_MARGINS);
    }

    #[test]
    fn test_non_positive_constant_rejected() {
        let err = LayoutConfig::from_toml_str("side_margins = 0").unwrap_err();
        assert!(matches!(
            err,
            ScanFrameError::Config(msg) if msg.contains("side_margins")
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = LayoutConfig::from_toml_str("width_breakpoint = \"wide\"").unwrap_err();
        assert!(matches!(err, ScanFrameError::TomlDe(_)));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("scanframe-{}.toml", std::process::id()));
        let config = LayoutConfig {
            header_height_large: 64,
            degenerate_policy: DegeneratePolicy::Fail,
            ..LayoutConfig::default()
        };
        save_config(&config, &path).unwrap();
        let loaded = load_config(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/scanframe.toml")).unwrap_err();
        assert!(matches!(err, ScanFrameError::Io(_)));
    }
}
