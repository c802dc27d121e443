//! Error types for the fetcher.
//!
//! # Design
//! The split follows what the caller can rely on afterwards. `Connection`
//! means the request never made it out (or the write itself failed), so no
//! response bytes exist. `Stream` means the request was sent and the
//! connection then broke before a clean end-of-stream; lines already yielded
//! remain valid but the fetch is incomplete. Neither variant is retried or
//! masked — a failure is fatal to the run.

use std::fmt;
use std::io;

/// Errors returned by [`HttpFetcher::fetch`](crate::HttpFetcher::fetch) and
/// by the [`ResponseLines`](crate::ResponseLines) iterator.
#[derive(Debug)]
pub enum FetchError {
    /// The target could not be reached: resolution failure, refusal,
    /// unreachable network, or a failure while writing the request.
    Connection(io::Error),

    /// The connection was interrupted after the request was sent but before
    /// the peer closed cleanly (reset mid-stream, read deadline expired).
    Stream(io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Connection(e) => write!(f, "connection failed: {e}"),
            FetchError::Stream(e) => write!(f, "stream interrupted: {e}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Connection(e) | FetchError::Stream(e) => Some(e),
        }
    }
}
