//! Single-shot mode: fetch once, print the body or an error line

use log::{debug, warn};
use std::io::{self, Write};

use crate::http::parse_url;
use crate::transport::{reported_status, Transport};

use super::stats::SUCCESS_STATUS;

/// Fetch `url` once and write the outcome to `out`
///
/// On status 200 the raw body is written unchanged. Any other status,
/// including the sentinel for connection and parse failures, writes
/// `Error! HTTP return code: N`.
///
/// # Returns
///
/// Returns the reported status code.
pub async fn run_single<T, W>(transport: &T, url: &str, out: &mut W) -> io::Result<u16>
where
    T: Transport,
    W: Write,
{
    let target = parse_url(url);
    debug!("Fetching {} once", target);

    let result = transport.fetch(&target).await;
    if let Err(e) = &result {
        warn!("Request to {} failed: {}", target, e);
    }

    let status_code = reported_status(&result);
    match result {
        Ok(response) if response.status_code == SUCCESS_STATUS => out.write_all(&response.body)?,
        _ => writeln!(out, "Error! HTTP return code: {}", status_code)?,
    }

    Ok(status_code)
}
