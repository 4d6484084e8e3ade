use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid parameter {name}: {value} (expected {min}..={max})")]
    InvalidParameter { name: &'static str, value: i64, min: i64, max: i64 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedVersion { found: u8, expected: u8 },
}

impl CoreError {
    /// 범위 검사 헬퍼 (UI 슬라이더 범위와 동일)
    pub fn check_range(name: &'static str, value: i64, min: i64, max: i64) -> Result<()> {
        if value < min || value > max {
            return Err(CoreError::InvalidParameter { name, value, min, max });
        }
        Ok(())
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            CoreError::InvalidParameter { .. } => true, // 입력 재조정으로 해결 가능
            CoreError::NotFound(_) => true,
            CoreError::InvalidSnapshot(_) => false,
            CoreError::InvalidConfig(_) => false,
            CoreError::Serialization(_) => false,
            CoreError::Io(_) => false,
            CoreError::UnsupportedVersion { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(CoreError::check_range("squad_size", 40, 10, 40).is_ok());
        assert!(CoreError::check_range("squad_size", 10, 10, 40).is_ok());

        let err = CoreError::check_range("squad_size", 41, 10, 40).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Invalid parameter squad_size: 41 (expected 10..=40)");
    }

    #[test]
    fn test_serde_error_conversion() {
        let err: CoreError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, CoreError::Serialization(_)));
        assert!(!err.is_recoverable());
    }
}
