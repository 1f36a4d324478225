//! Where the release key comes from
//!
//! The resolver only ever sees an integer; this module owns the collaborators
//! that produce one.
//!
//! # Modules
//!
//! - [`error`]: failure taxonomy for obtaining a release key
//! - `registry`: Windows registry source (compiled on Windows only)

pub mod error;
#[cfg(windows)]
pub mod registry;

pub use error::SourceError;

/// Trait for obtaining the installed runtime's release key.
pub trait ReleaseKeySource {
    /// Produce the release key, or describe why one could not be obtained.
    fn release_key(&self) -> Result<i64, SourceError>;
}

/// Source that yields a caller-supplied release key.
///
/// Backs the `--key` flag and makes the resolver testable without a registry.
pub struct FixedSource {
    key: i64,
}

impl FixedSource {
    pub fn new(key: i64) -> Self {
        Self { key }
    }
}

impl ReleaseKeySource for FixedSource {
    fn release_key(&self) -> Result<i64, SourceError> {
        Ok(self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_source_yields_its_key() {
        assert_eq!(FixedSource::new(528049).release_key().unwrap(), 528049);
        assert_eq!(FixedSource::new(-3).release_key().unwrap(), -3);
    }
}
