use thiserror::Error;

/// Failures while dispatching a meeting request.
///
/// `Display` is the exact text shown after `"Error: "` in the page.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Cannot read properties of {target} (reading '{property}')")]
    NullishAccess {
        target: &'static str,
        property: &'static str,
    },
    #[error("Element not found: #{0}")]
    MissingElement(&'static str),
    #[error("Invalid scheduler API URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}
