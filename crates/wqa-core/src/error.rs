//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WqaError {
    #[error("CATALOG/{0}")]
    CatalogError(String),

    #[error("CONFIG/{0}")]
    ConfigError(String),

    #[error("RENDER/{0}")]
    RenderError(String),

    #[error("DOCUMENT/{0}")]
    DocumentError(String),

    #[error("PROPOSAL/{0}")]
    ProposalError(String),

    #[error("IO/{0}")]
    IoError(#[from] std::io::Error),
}

pub type WqaResult<T> = Result<T, WqaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_prefixes() {
        let err = WqaError::CatalogError("database.json: expected value".to_string());
        assert_eq!(err.to_string(), "CATALOG/database.json: expected value");

        let err = WqaError::ProposalError("design period must be positive".to_string());
        assert!(err.to_string().starts_with("PROPOSAL/"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: WqaError = io.into();
        assert!(matches!(err, WqaError::IoError(_)));
        assert!(err.to_string().starts_with("IO/"));
    }
}
