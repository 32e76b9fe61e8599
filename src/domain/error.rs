use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("File error: {0}")]
    File(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Bad response: {0}")]
    BadResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Insufficient data: regression needs at least {required} rows, got {found}")]
    InsufficientData { required: usize, found: usize },

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

/// Failure of a single mention request. Recovered inside the fetch loop.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Bad response: {0}")]
    BadResponse(String),
}

impl From<FetchError> for DomainError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Network(msg) => DomainError::Network(msg),
            FetchError::Status(code) => DomainError::Network(format!("HTTP status {code}")),
            FetchError::BadResponse(msg) => DomainError::BadResponse(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_conversion() {
        assert!(matches!(
            DomainError::from(FetchError::Status(404)),
            DomainError::Network(ref msg) if msg.contains("404")
        ));
        assert!(matches!(
            DomainError::from(FetchError::BadResponse("x".into())),
            DomainError::BadResponse(_)
        ));
    }

    #[test]
    fn test_insufficient_data_message() {
        let err = DomainError::InsufficientData { required: 3, found: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: regression needs at least 3 rows, got 1"
        );
    }
}
