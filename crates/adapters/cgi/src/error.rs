//! Request decoding errors.

/// Why a CGI request could not be decoded into a form submission.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// `REQUEST_METHOD` was something other than GET, HEAD, or POST.
    #[error("unsupported request method {0}")]
    UnsupportedMethod(String),

    /// The POST body is not URL-encoded form data.
    #[error("unsupported content type {0}")]
    UnsupportedContentType(String),

    /// `CONTENT_LENGTH` is not a non-negative integer.
    #[error("invalid content length {0:?}")]
    InvalidContentLength(String),

    /// The declared body exceeds the accepted size.
    #[error("request body of {length} bytes exceeds the {limit} byte limit")]
    BodyTooLarge { length: u64, limit: u64 },

    /// Standard input ended before the declared length.
    #[error("request body ended after {actual} of {expected} bytes")]
    ShortBody { expected: u64, actual: u64 },

    /// Standard input could not be read.
    #[error("failed to read request body")]
    Read(#[from] std::io::Error),
}
