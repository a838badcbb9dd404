//! Error types for the operation layer.
//!
//! The `Display` text of each variant is the message a caller sees in a
//! failed envelope.

use thiserror::Error;

/// Errors produced by [`MovieService`](crate::MovieService) operations,
/// wrapping upstream API errors and adding the business-rule failures.
#[derive(Error, Debug)]
pub enum SdkError {
    /// The HTTP call or the response decoding failed.
    #[error(transparent)]
    Api(#[from] lotr_api::Error),
    /// The call succeeded but no movie has the requested id.
    #[error("There is no movie with id {id}")]
    MovieNotFound { id: String },
    /// The call succeeded but the movie has no quotes. Only the three
    /// Lord of the Rings films carry quotes upstream.
    #[error("There is no quotes for requested movie. Check, that movie is from the LOTR trilogy!")]
    NoQuotes,
    /// The full catalog came back empty.
    #[error("Sorry, but movies list is empty for some reason(")]
    EmptyCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdk_error_display() {
        let err = SdkError::MovieNotFound {
            id: "NotExistenId".to_string(),
        };
        assert_eq!(err.to_string(), "There is no movie with id NotExistenId");

        assert!(SdkError::NoQuotes.to_string().contains("LOTR trilogy"));
        assert!(SdkError::EmptyCatalog.to_string().contains("empty"));
    }

    #[test]
    fn api_error_is_transparent() {
        let err: SdkError = lotr_api::Error::HttpStatus {
            status: 401,
            reason: "Unauthorized".to_string(),
            body: String::new(),
        }
        .into();
        assert_eq!(err.to_string(), "API call failed! Problem is: 401 Unauthorized");
        assert!(std::error::Error::source(&err).is_none());
    }
}
