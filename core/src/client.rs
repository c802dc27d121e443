//! The blocking fetcher: connect, send, stream.
//!
//! # Design
//! `HttpFetcher` performs exactly one GET per call and holds no connection
//! state between calls. A fetch is strictly sequential: connect, write the
//! whole request, flush, then hand the socket to `ResponseLines` for the
//! read pass. There is no retry and no reconnection; every failure surfaces
//! immediately.
//!
//! By default there is no read deadline — a peer that accepts and then goes
//! silent blocks the caller indefinitely. Callers that want a bound set one
//! with [`HttpFetcher::with_read_timeout`].

use std::io::{BufReader, Write};
use std::net::TcpStream;
use std::time::Duration;

use log::debug;

use crate::error::FetchError;
use crate::http::{GetRequest, HTTP_PORT};
use crate::lines::ResponseLines;

/// One-shot HTTP GET client.
///
/// Each [`fetch`](HttpFetcher::fetch) opens its own connection, sends
/// `GET /`, and returns a streaming line iterator that ends when the peer
/// closes. The fetcher itself is stateless and reusable, but no fetch is
/// restartable: consuming the returned iterator is the only way to read
/// that response.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    port: u16,
    read_timeout: Option<Duration>,
}

impl HttpFetcher {
    /// A fetcher with the production defaults: port 80, no read deadline.
    pub fn new() -> Self {
        Self {
            port: HTTP_PORT,
            read_timeout: None,
        }
    }

    /// Override the target port. Exists so tests can point the fetcher at a
    /// local server on an ephemeral port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Bound each read by a deadline. A read that exceeds it fails the fetch
    /// with [`FetchError::Stream`].
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Connect to `(host, port)`, send `GET /`, and return the response as a
    /// lazy line stream.
    ///
    /// Blocks until connected; each subsequent `next()` on the iterator
    /// blocks until a line arrives or the peer closes. The host text is used
    /// verbatim, both for resolution and in the `Host` header. The socket is
    /// closed when the returned iterator is dropped.
    pub fn fetch(&self, host: &str) -> Result<ResponseLines<BufReader<TcpStream>>, FetchError> {
        let request = GetRequest::new(host);

        let mut stream =
            TcpStream::connect((host, self.port)).map_err(FetchError::Connection)?;
        debug!("connected to {host}:{}", self.port);

        // The whole request goes out before the first read.
        stream
            .write_all(&request.to_bytes())
            .and_then(|()| stream.flush())
            .map_err(FetchError::Connection)?;
        debug!("request sent, awaiting response");

        if self.read_timeout.is_some() {
            stream
                .set_read_timeout(self.read_timeout)
                .map_err(FetchError::Connection)?;
        }

        Ok(ResponseLines::new(BufReader::new(stream)))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}
