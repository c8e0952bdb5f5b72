//! HTTP/1.0 request construction
//!
//! Only `GET` is emitted, with a single `Host` header and no body.

use bytes::{BufMut, Bytes, BytesMut};

use super::url::Target;

/// Build the raw bytes of a `GET` request for `target`
///
/// The wire form is exactly `GET <resource> HTTP/1.0\r\nHost: <host>\r\n\r\n`.
pub fn build_request(target: &Target) -> Bytes {
    let mut buf = BytesMut::with_capacity(32 + target.resource.len() + target.host.len());

    buf.put_slice(b"GET ");
    buf.put_slice(target.resource.as_bytes());
    buf.put_slice(b" HTTP/1.0\r\nHost: ");
    buf.put_slice(target.host.as_bytes());
    buf.put_slice(b"\r\n\r\n");

    buf.freeze()
}
