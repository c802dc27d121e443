//! Request framing as plain data.
//!
//! # Design
//! The request is described as a value with a `to_bytes` method rather than
//! written inline at the socket, so the exact wire bytes are unit-testable
//! without any network. Line terminators are CRLF, the form HTTP/1.1
//! mandates; the host text is used verbatim, unvalidated — a bad host is the
//! resolver's problem, not this module's.

/// Default port for plain HTTP.
pub const HTTP_PORT: u16 = 80;

/// A minimal `GET /` request: request line, `Host` header, blank line,
/// no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRequest {
    host: String,
}

impl GetRequest {
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
        }
    }

    /// The host exactly as supplied by the caller.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The literal bytes to put on the wire:
    /// `GET / HTTP/1.1\r\nHost: <host>\r\n\r\n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        format!("GET / HTTP/1.1\r\nHost: {}\r\n\r\n", self.host).into_bytes()
    }
}
