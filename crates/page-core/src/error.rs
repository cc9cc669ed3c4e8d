use thiserror::Error;

/// Failures surfaced by page initializers.
///
/// None of these are fatal for the page as a whole: each initializer runs on
/// its own and the frontend only logs the error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PageError {
    #[error("unknown page variant `{0}`")]
    UnknownVariant(String),
    #[error("missing element `{0}`")]
    MissingElement(String),
    #[error("vendor library error: {0}")]
    Vendor(String),
    #[error("font load failed: {0}")]
    Font(String),
}
