use std::io;

use thiserror::Error;

/// Failure taxonomy for obtaining a release key from a configuration source.
///
/// `KeyPathNotFound` is not fatal to the caller: the v4 setup key is simply
/// absent on machines whose newest framework predates 4.5.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("registry key not found: {path}")]
    KeyPathNotFound { path: String },

    #[error("registry value not found: {name}")]
    ValueNotFound { name: String },

    #[error("registry value {name} has unsupported type {found}")]
    WrongValueType { name: String, found: String },

    #[error("registry value {name} is not a decimal integer: {raw:?}")]
    UnparsableValue { name: String, raw: String },

    #[error("insufficient permission to read {path}")]
    PermissionDenied { path: String },

    #[error("unexpected failure reading configuration: {0}")]
    Unexpected(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_location() {
        let err = SourceError::KeyPathNotFound {
            path: r"HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r"registry key not found: HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft"
        );

        let err = SourceError::UnparsableValue {
            name: "Release".to_string(),
            raw: "not-a-number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"registry value Release is not a decimal integer: "not-a-number""#
        );
    }

    #[test]
    fn io_errors_convert_to_unexpected() {
        let err = SourceError::from(io::Error::other("boom"));
        assert!(matches!(err, SourceError::Unexpected(_)));
    }
}
