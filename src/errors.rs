use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanFrameError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Degenerate layout: scan window would be {width}x{height} px")]
    DegenerateLayout { width: i32, height: i32 },

    #[error("Scan window has not been laid out yet")]
    NotLaidOut,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialize error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl serde::Serialize for ScanFrameError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

pub type ScanFrameResult<T> = Result<T, ScanFrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serializes_as_message() {
        let err = ScanFrameError::DegenerateLayout {
            width: -24,
            height: -12,
        };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            "\"Degenerate layout: scan window would be -24x-12 px\""
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn read_missing() -> ScanFrameResult<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/scanframe.toml")?)
        }
        assert!(matches!(read_missing(), Err(ScanFrameError::Io(_))));
    }
}
