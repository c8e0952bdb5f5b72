//! HTTP client over raw TCP or TLS streams
//!
//! Each fetch opens a fresh connection, writes one HTTP/1.0 request and reads
//! until the server closes the stream. The stream is owned by the fetch and
//! dropped on every exit path.

use bytes::BytesMut;
use log::{debug, trace};
use openssl::ssl::SslConnector;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::common::Result;
use crate::config::ClientConfig;
use crate::http::{build_request, parse_response, Target};
use crate::tls::{connect_tls, create_tls_connector};

use super::error::{FetchError, FetchResult};
use super::{Scheme, Transport};

/// Client issuing one HTTP/1.0 `GET` per fetch
pub struct HttpClient {
    /// Plain or TLS transport
    scheme: Scheme,
    /// Client configuration (shared with the rest of the application)
    config: Arc<ClientConfig>,
    /// TLS connector, present only for HTTPS
    connector: Option<SslConnector>,
}

impl HttpClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS connector cannot be created.
    pub fn new(scheme: Scheme, config: Arc<ClientConfig>) -> Result<Self> {
        let connector = match scheme {
            Scheme::Http => None,
            Scheme::Https => Some(create_tls_connector()?),
        };

        Ok(Self { scheme, config, connector })
    }

    /// Transport scheme used by this client
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Port to connect to: the URL's explicit port, else the scheme default
    fn port_for(&self, target: &Target) -> std::result::Result<u16, FetchError> {
        match target.explicit_port() {
            Some(port) => port
                .parse()
                .map_err(|_| FetchError::ConnectionFailed(format!("invalid port {:?}", port))),
            None => Ok(self.scheme.default_port(&self.config)),
        }
    }

    async fn exchange(&self, target: &Target) -> FetchResult {
        let port = self.port_for(target)?;
        let server_name = target.server_name();

        let tcp_stream = TcpStream::connect((server_name, port))
            .await
            .map_err(|e| FetchError::ConnectionFailed(format!("{}:{}: {}", server_name, port, e)))?;
        debug!("Connected to {}:{}", server_name, port);

        let request = build_request(target);
        let raw = match &self.connector {
            None => send_and_read(tcp_stream, &request, self.config.buffer_size).await?,
            Some(connector) => {
                let tls_stream = connect_tls(connector, server_name, tcp_stream)
                    .await
                    .map_err(|e| FetchError::ConnectionFailed(e.to_string()))?;
                send_and_read(tls_stream, &request, self.config.buffer_size).await?
            }
        };

        trace!("Received {} bytes from {}", raw.len(), target.host);
        Ok(parse_response(&raw)?)
    }
}

impl Transport for HttpClient {
    async fn fetch(&self, target: &Target) -> FetchResult {
        match self.config.request_timeout() {
            Some(limit) => timeout(limit, self.exchange(target))
                .await
                .unwrap_or(Err(FetchError::TimedOut(limit))),
            None => self.exchange(target).await,
        }
    }
}

/// Write the request, then read until the peer closes the stream
///
/// A read error after some bytes arrived ends the response; servers that
/// drop TLS connections without close_notify rely on this.
async fn send_and_read<S>(
    mut stream: S,
    request: &[u8],
    buffer_size: usize,
) -> std::result::Result<BytesMut, FetchError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    stream
        .write_all(request)
        .await
        .map_err(|e| FetchError::ConnectionFailed(format!("write failed: {}", e)))?;
    stream
        .flush()
        .await
        .map_err(|e| FetchError::ConnectionFailed(format!("flush failed: {}", e)))?;

    let mut buffer = vec![0u8; buffer_size];
    let mut raw = BytesMut::with_capacity(buffer_size);

    loop {
        match stream.read(&mut buffer).await {
            Ok(0) => break, // Connection closed
            Ok(n) => raw.extend_from_slice(&buffer[..n]),
            Err(e) if !raw.is_empty() => {
                debug!("Read ended after {} bytes: {}", raw.len(), e);
                break;
            }
            Err(e) => {
                return Err(FetchError::ConnectionFailed(format!("read failed: {}", e)));
            }
        }
    }

    Ok(raw)
}
