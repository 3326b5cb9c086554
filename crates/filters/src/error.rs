//! Filter-catalog error types.

use ss_common::FilterKind;
use thiserror::Error;

/// Errors from the filter registry.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The name is not one of the known filter identifiers.
    #[error("Filter not found: {name}")]
    NotFound { name: String },

    /// A preset for this filter is already registered.
    #[error("Filter already registered: {kind}")]
    AlreadyRegistered { kind: FilterKind },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = FilterError::NotFound {
            name: "vintage".to_string(),
        };
        assert_eq!(err.to_string(), "Filter not found: vintage");

        let err = FilterError::AlreadyRegistered {
            kind: FilterKind::Sepia,
        };
        assert!(err.to_string().contains("sepia"));
    }
}
