//! Error types for the form-filling library.

/// Result type alias for form-filling operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while manipulating an AcroForm.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field name did not resolve against the form's field mapping.
    #[error("Form field not found: '{0}'")]
    FieldNotFound(String),

    /// The form or a field record is structurally invalid.
    #[error("Invalid form: {0}")]
    InvalidForm(String),

    /// Font program loading or parsing failed.
    #[error("Font error: {0}")]
    Font(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
