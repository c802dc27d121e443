//! Command-line front end: ask for a host, fetch `/`, echo the raw response.
//!
//! Reads one line from stdin as the target host, fetches over port 80, and
//! prints every received line verbatim between two banner lines. Any failure
//! propagates out of `main`: non-zero exit, diagnostic on stderr. Set
//! `RUST_LOG=debug` for connection-level tracing.

use std::io::{self, BufRead};

use log::debug;
use webget_core::HttpFetcher;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=====Where to?=====");
    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    // Strip the line terminator only; the rest goes through verbatim.
    let host = input.strip_suffix('\n').unwrap_or(&input);
    let host = host.strip_suffix('\r').unwrap_or(host);
    debug!("target host: {host:?}");

    // Connect and send before the banner, matching the original flow: a
    // connection failure leaves only the first banner on screen.
    let lines = HttpFetcher::new().fetch(host)?;

    println!("=====Response=====");
    for line in lines {
        println!("{}", line?);
    }
    Ok(())
}
