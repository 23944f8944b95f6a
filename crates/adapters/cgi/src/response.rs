//! CGI response: header block plus HTML body written to standard output.

use std::fmt;
use std::io::{self, Write};

/// HTTP statuses this program answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    MethodNotAllowed,
    UnsupportedMediaType,
    InternalServerError,
}

impl Status {
    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::MethodNotAllowed => 405,
            Self::UnsupportedMediaType => 415,
            Self::InternalServerError => 500,
        }
    }

    #[must_use]
    pub fn reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadRequest => "Bad Request",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::UnsupportedMediaType => "Unsupported Media Type",
            Self::InternalServerError => "Internal Server Error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// A complete CGI response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CgiResponse {
    pub status: Status,
    pub body: String,
}

impl CgiResponse {
    pub fn html(status: Status, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Write headers and body. The `Status` header is only sent when the
    /// status is not 200, which the server assumes by default.
    ///
    /// # Errors
    ///
    /// Propagates IO errors from `out`.
    pub fn write_to(&self, mut out: impl Write) -> io::Result<()> {
        if self.status != Status::Ok {
            write!(out, "Status: {}\r\n", self.status)?;
        }
        if self.status == Status::MethodNotAllowed {
            out.write_all(b"Allow: GET, HEAD, POST\r\n")?;
        }
        out.write_all(b"Content-Type: text/html; charset=utf-8\r\n\r\n")?;
        out.write_all(self.body.as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(response: &CgiResponse) -> String {
        let mut out = Vec::new();
        response.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn should_omit_status_header_for_ok() {
        let text = rendered(&CgiResponse::html(Status::Ok, "<html></html>"));
        assert_eq!(
            text,
            "Content-Type: text/html; charset=utf-8\r\n\r\n<html></html>"
        );
    }

    #[test]
    fn should_send_status_header_for_errors() {
        let text = rendered(&CgiResponse::html(Status::InternalServerError, "boom"));
        assert!(text.starts_with("Status: 500 Internal Server Error\r\n"));
        assert!(text.ends_with("\r\n\r\nboom"));
    }

    #[test]
    fn should_list_allowed_methods_on_405() {
        let text = rendered(&CgiResponse::html(Status::MethodNotAllowed, ""));
        assert!(text.contains("Allow: GET, HEAD, POST\r\n"));
    }

    #[test]
    fn should_display_code_and_reason() {
        assert_eq!(Status::BadRequest.to_string(), "400 Bad Request");
        assert_eq!(Status::UnsupportedMediaType.code(), 415);
    }
}
