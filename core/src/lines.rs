//! Streaming line scanner over a response byte stream.
//!
//! # Design
//! `ResponseLines` is generic over `BufRead` so splitting behavior can be
//! unit-tested against in-memory cursors; `HttpFetcher` instantiates it over
//! a buffered socket. Each `next()` reads exactly one line — nothing is
//! buffered beyond the line being assembled, so the caller observes a live
//! stream rather than a materialized list.
//!
//! Splitting recognizes `\n` and `\r\n` as terminators and yields a final
//! unterminated line as-is. Bytes are decoded as UTF-8 with lossy
//! replacement: the peer promised nothing about well-formed text, and a
//! stray byte should not abort an otherwise readable stream.

use std::io::BufRead;

use log::{debug, trace};

use crate::error::FetchError;

/// Lazy iterator over the lines of a response stream.
///
/// Yields each line in arrival order until the peer closes its write side
/// (EOF), which ends the iteration. A read failure yields one
/// `Err(FetchError::Stream)` and the iterator is fused afterwards. Dropping
/// the iterator drops the underlying reader, which closes the socket when
/// the reader wraps one.
#[derive(Debug)]
pub struct ResponseLines<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> ResponseLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for ResponseLines<R> {
    type Item = Result<String, FetchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                debug!("peer closed connection (eof)");
                self.done = true;
                None
            }
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                } else {
                    // Unterminated final line; eof follows on the next call.
                    trace!("final line arrived without terminator");
                }
                Some(Ok(String::from_utf8_lossy(&buf).into_owned()))
            }
            Err(e) => {
                self.done = true;
                Some(Err(FetchError::Stream(e)))
            }
        }
    }
}
