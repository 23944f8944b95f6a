//! CGI/1.1 request decoding.
//!
//! The web server passes request metadata in environment variables and the
//! body on standard input. Only URL-encoded forms are understood.

use std::io::Read;

use rsswitch_domain::form::FormSubmission;

use crate::error::RequestError;

/// Largest POST body accepted.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// HTTP method of a CGI request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
}

impl Method {
    fn parse(raw: &str) -> Result<Self, RequestError> {
        match raw.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "HEAD" => Ok(Self::Head),
            "POST" => Ok(Self::Post),
            _ => Err(RequestError::UnsupportedMethod(raw.to_string())),
        }
    }
}

/// Request metadata taken from the CGI meta-variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CgiRequest {
    pub method: Option<String>,
    pub query_string: Option<String>,
    pub content_type: Option<String>,
    pub content_length: Option<String>,
}

impl CgiRequest {
    /// Read the meta-variables from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the meta-variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            method: lookup("REQUEST_METHOD"),
            query_string: lookup("QUERY_STRING"),
            content_type: lookup("CONTENT_TYPE"),
            content_length: lookup("CONTENT_LENGTH"),
        }
    }

    /// The request method. A missing `REQUEST_METHOD` counts as GET, which
    /// is what running the program by hand looks like.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::UnsupportedMethod`] for anything else.
    pub fn method(&self) -> Result<Method, RequestError> {
        self.method.as_deref().map_or(Ok(Method::Get), Method::parse)
    }

    /// Decode the submitted form.
    ///
    /// POST bodies come first, then any query string fields; for a repeated
    /// field the first value wins.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] for unsupported methods or content types,
    /// malformed or oversized lengths, and truncated bodies.
    pub fn read_form(&self, body: impl Read) -> Result<FormSubmission, RequestError> {
        let mut form = FormSubmission::new();
        if self.method()? == Method::Post {
            self.check_content_type()?;
            let bytes = self.read_body(body)?;
            form.extend(form_urlencoded::parse(&bytes));
        }
        if let Some(query) = &self.query_string {
            form.extend(form_urlencoded::parse(query.as_bytes()));
        }
        tracing::debug!(fields = form.len(), "form decoded");
        Ok(form)
    }

    fn check_content_type(&self) -> Result<(), RequestError> {
        let Some(content_type) = self.content_type.as_deref() else {
            return Ok(());
        };
        let mime = content_type.split(';').next().unwrap_or_default().trim();
        if mime.is_empty() || mime.eq_ignore_ascii_case(FORM_URLENCODED) {
            Ok(())
        } else {
            Err(RequestError::UnsupportedContentType(content_type.to_string()))
        }
    }

    fn content_length(&self) -> Result<u64, RequestError> {
        match self.content_length.as_deref().map(str::trim) {
            None | Some("") => Ok(0),
            Some(raw) => raw
                .parse()
                .map_err(|_| RequestError::InvalidContentLength(raw.to_string())),
        }
    }

    fn read_body(&self, body: impl Read) -> Result<Vec<u8>, RequestError> {
        let expected = self.content_length()?;
        if expected > MAX_BODY_BYTES {
            return Err(RequestError::BodyTooLarge {
                length: expected,
                limit: MAX_BODY_BYTES,
            });
        }
        let mut bytes = Vec::new();
        body.take(expected).read_to_end(&mut bytes)?;
        let actual = bytes.len() as u64;
        if actual < expected {
            return Err(RequestError::ShortBody { expected, actual });
        }
        Ok(bytes)
    }
}
