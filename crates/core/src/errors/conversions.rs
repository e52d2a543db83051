//! Conversion implementations for error types

use super::types::Error;

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

// Bodies written against anyhow can use `?` inside a nested scope
impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Error::Block {
            message: error.to_string(),
            source: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_anyhow_becomes_block_failure() {
        let error: Error = anyhow::anyhow!("daemon crashed").into();
        assert!(matches!(error, Error::Block { .. }));
        assert_eq!(error.to_string(), "scoped block failed: daemon crashed");
    }

    #[test]
    fn test_from_serde_json() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = parse.into();
        assert!(error.to_string().starts_with("JSON error:"));
    }
}
