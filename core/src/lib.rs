//! One-shot raw HTTP/1.1 fetcher.
//!
//! # Overview
//! Opens a TCP connection to a caller-supplied host, writes a minimal
//! `GET / HTTP/1.1` request by hand, and streams the raw response back as
//! text lines until the peer closes the connection. No framework, no header
//! parsing, no status interpretation — end-of-stream is the only framing.
//!
//! # Design
//! - `GetRequest` describes the request as plain data, IO-free, so the exact
//!   wire bytes can be unit-tested without a socket.
//! - `ResponseLines` is a streaming iterator over any `BufRead`, so line
//!   splitting is testable against in-memory cursors.
//! - `HttpFetcher` is the only piece that touches the network: one blocking
//!   connect, one write pass, one read pass, no retries.
//! - Errors split into `Connection` (nothing was read back) and `Stream`
//!   (the peer broke off after the request went out).

pub mod client;
pub mod error;
pub mod http;
pub mod lines;

pub use client::HttpFetcher;
pub use error::FetchError;
pub use http::GetRequest;
pub use lines::ResponseLines;
