//! Error types for netconv core
//!
//! A conversion either succeeds completely or fails with one of these; there
//! is no partial-success mode.

/// Conversion error
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Snapshot could not be serialized during down-conversion
    #[error("failed to encode conversion snapshot: {0}")]
    Encoding(String),

    /// Snapshot is present but cannot be read back during up-conversion
    #[error("failed to decode conversion snapshot under {key:?}: {reason}")]
    Decoding {
        /// Side-channel key the payload was read from
        key: String,
        reason: String,
    },

    /// No conversion path for an `apiVersion`/`kind` pair
    #[error("unsupported version {api_version:?} for kind {kind:?}")]
    UnsupportedVersion { api_version: String, kind: String },
}

impl ConversionError {
    /// Build a decoding error for `key`
    #[inline]
    pub fn decoding(key: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Decoding {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if the record carries a corrupt snapshot
    ///
    /// Such records must not be silently converted using mapped values only.
    #[inline]
    #[must_use]
    pub fn is_corrupt_snapshot(&self) -> bool {
        matches!(self, Self::Decoding { .. })
    }
}

/// Result alias for conversion operations
pub type Result<T, E = ConversionError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoding_is_corrupt() {
        let err = ConversionError::decoding("k", "expected value at line 1 column 1");
        assert!(err.is_corrupt_snapshot());
        assert_eq!(
            err.to_string(),
            "failed to decode conversion snapshot under \"k\": expected value at line 1 column 1"
        );
    }

    #[test]
    fn encoding_is_not_corrupt() {
        let err = ConversionError::Encoding("boom".to_string());
        assert!(!err.is_corrupt_snapshot());
    }

    #[test]
    fn unsupported_version_message() {
        let err = ConversionError::UnsupportedVersion {
            api_version: "netconv.x-k8s.io/v1alpha3".to_string(),
            kind: "ManagedControlPlane".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported version \"netconv.x-k8s.io/v1alpha3\" for kind \"ManagedControlPlane\""
        );
    }
}
