//! Reveal error types
//!
//! The only fatal failure is a misconfigured picture view; everything
//! else in the pipeline degrades to a no-op rather than an error, since
//! a missed frame in a visual component is not worth surfacing.

use thiserror::Error;

/// Errors surfaced by the reveal views
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RevealError {
    /// The picture-backed view was constructed without an image.
    /// The picture is mandatory; the view refuses to initialize
    /// instead of degrading to an empty reveal.
    #[error("picture view requires an image, none was supplied")]
    MissingPicture,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message() {
        let message = RevealError::MissingPicture.to_string();
        assert!(message.contains("image"));
    }
}
