//! TLS connector creation and client handshakes

use log::{debug, warn};
use openssl::ssl::{SslConnector, SslMethod};
use std::pin::Pin;
use tokio::net::TcpStream;
use tokio_openssl::SslStream;

use crate::common::{ClientError, Result};

/// Create a TLS connector
///
/// The connector trusts the system's default certificate store and verifies
/// the server certificate and host name.
///
/// # Example
///
/// ```no_run
/// # use webprof::tls::create_tls_connector;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let connector = create_tls_connector()?;
/// # Ok(())
/// # }
/// ```
pub fn create_tls_connector() -> Result<SslConnector> {
    let builder = SslConnector::builder(SslMethod::tls())?;

    debug!("TLS connector created with system default trust store");
    Ok(builder.build())
}

/// Run a client handshake over an established TCP stream
///
/// # Parameters
///
/// * `connector` - TLS connector
/// * `server_name` - Host name used for SNI and certificate verification
/// * `tcp_stream` - Connected TCP stream
///
/// # Returns
///
/// Returns the encrypted stream once the handshake has completed.
pub async fn connect_tls(
    connector: &SslConnector,
    server_name: &str,
    tcp_stream: TcpStream,
) -> Result<SslStream<TcpStream>> {
    let ssl = connector.configure()?.into_ssl(server_name)?;
    let mut stream = SslStream::new(ssl, tcp_stream)?;

    if let Err(e) = Pin::new(&mut stream).connect().await {
        warn!("TLS handshake with {} failed: {}", server_name, e);
        return Err(ClientError::TlsHandshake(e.to_string()));
    }

    debug!(
        "TLS handshake with {} successful ({})",
        server_name,
        stream.ssl().version_str()
    );
    Ok(stream)
}
