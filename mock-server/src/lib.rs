//! Scripted TCP peer for exercising the fetcher against controlled streams.
//!
//! # Design
//! The fetcher's contract is about framing, close, and reset at the byte
//! level, so this server speaks raw TCP rather than going through an HTTP
//! stack: each [`Script`] dictates exactly what happens to one accepted
//! connection. `serve_once` returns the request bytes it captured so tests
//! can assert the exact wire framing the client produced.

use std::io;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// What to do with the next accepted connection.
#[derive(Debug, Clone)]
pub enum Script {
    /// Read the request head, send these bytes, close cleanly.
    Respond(Vec<u8>),

    /// Read the request head, then close without sending anything. The
    /// client observes an immediate clean end-of-stream.
    CloseWithoutResponse,

    /// Abort the connection without reading. SO_LINGER is set to zero so the
    /// close goes out as an RST rather than an orderly FIN.
    Reset,

    /// Read the request head, send nothing, and hold the connection open for
    /// the given duration before closing. For deadline tests.
    Stall(Duration),
}

/// Accept one connection and play `script` against it.
///
/// Returns the request bytes read from the client (empty for
/// [`Script::Reset`], which never reads).
pub async fn serve_once(listener: &TcpListener, script: Script) -> io::Result<Vec<u8>> {
    let (mut stream, _) = listener.accept().await?;
    match script {
        Script::Respond(bytes) => {
            let head = read_head(&mut stream).await?;
            stream.write_all(&bytes).await?;
            stream.shutdown().await?;
            Ok(head)
        }
        Script::CloseWithoutResponse => {
            let head = read_head(&mut stream).await?;
            stream.shutdown().await?;
            Ok(head)
        }
        Script::Reset => {
            stream.set_linger(Some(Duration::ZERO))?;
            drop(stream);
            Ok(Vec::new())
        }
        Script::Stall(duration) => {
            let head = read_head(&mut stream).await?;
            tokio::time::sleep(duration).await;
            Ok(head)
        }
    }
}

/// Read up to and including the blank line that ends the request head.
///
/// Stops early on eof so a client that disconnects mid-request does not hang
/// the server side of a test.
async fn read_head(stream: &mut TcpStream) -> io::Result<Vec<u8>> {
    let mut head = Vec::new();
    let mut byte = [0u8; 1];
    while !head.ends_with(b"\r\n\r\n") {
        let n = stream.read(&mut byte).await?;
        if n == 0 {
            break;
        }
        head.push(byte[0]);
    }
    Ok(head)
}
