//! HTTP module
//!
//! URL decomposition, HTTP/1.0 request construction and response parsing.

mod request;
mod response;
mod url;

pub use request::build_request;
pub use response::{parse_response, ParseError, ParsedResponse};
pub use url::{parse_url, Target};
