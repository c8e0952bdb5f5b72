//! URL decomposition
//!
//! Splits a user-supplied URL into the host (optionally `host:port`) and the
//! resource path. Host syntax is not validated here: a bad host surfaces as
//! a connection failure when the transport tries to reach it.

use std::fmt;

/// Schemes stripped from the front of a URL
const SCHEMES: [&str; 2] = ["http://", "https://"];

/// A decomposed request target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Host as written in the URL, including an explicit port if present
    pub host: String,
    /// Absolute resource path, always starting with `/`
    pub resource: String,
}

impl Target {
    /// Host name without any port, brackets removed from IPv6 literals
    ///
    /// This is the name used for DNS resolution and TLS SNI.
    pub fn server_name(&self) -> &str {
        self.split_host_port().0
    }

    /// Explicit port text from the URL, if any
    pub fn explicit_port(&self) -> Option<&str> {
        self.split_host_port().1
    }

    fn split_host_port(&self) -> (&str, Option<&str>) {
        let host = self.host.as_str();

        if let Some(rest) = host.strip_prefix('[') {
            return match rest.split_once(']') {
                Some((name, tail)) => (name, tail.strip_prefix(':')),
                None => (host, None),
            };
        }

        // A bare IPv6 literal has several colons and no port
        match host.rsplit_once(':') {
            Some((name, port)) if !name.contains(':') => (name, Some(port)),
            _ => (host, None),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.host, self.resource)
    }
}

/// Decompose a URL into host and resource
///
/// An `http://` or `https://` prefix is removed, then the remainder is split
/// on the first `/`.
///
/// # Example
///
/// ```
/// # use webprof::http::parse_url;
/// let target = parse_url("http://example.com/index.html");
/// assert_eq!(target.host, "example.com");
/// assert_eq!(target.resource, "/index.html");
/// ```
pub fn parse_url(url: &str) -> Target {
    let mut rest = url;
    if SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        if let Some((_, after)) = url.split_once("//") {
            rest = after;
        }
    }

    let (host, resource) = match rest.split_once('/') {
        Some((host, path)) => (host, format!("/{}", path)),
        None => (rest, "/".to_string()),
    };

    Target {
        host: host.to_string(),
        resource,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_with_scheme_and_path() {
        assert_eq!(
            parse_url("http://a.com/b"),
            Target { host: "a.com".to_string(), resource: "/b".to_string() }
        );
        assert_eq!(parse_url("https://a.com/b/c?q=1").resource, "/b/c?q=1");
    }

    #[test]
    fn test_parse_url_defaults_resource() {
        let target = parse_url("a.com");
        assert_eq!(target.host, "a.com");
        assert_eq!(target.resource, "/");

        let target = parse_url("https://a.com");
        assert_eq!(target.host, "a.com");
        assert_eq!(target.resource, "/");

        assert_eq!(parse_url("a.com/").resource, "/");
    }

    #[test]
    fn test_resource_always_absolute() {
        let inputs = [
            "", "/", "a.com", "http://", "https://a.com//x", "ftp://a.com/x",
            "a.com:8080/p", "http://[::1]:8080", "no scheme/with space",
        ];

        for input in inputs {
            let target = parse_url(input);
            assert!(target.resource.starts_with('/'), "{:?} -> {:?}", input, target);
        }
    }

    #[test]
    fn test_no_host_validation() {
        // Only the connection attempt reports a bad host
        assert_eq!(parse_url("http:///x").host, "");
        assert_eq!(parse_url("ftp://a.com/x").host, "ftp:");
    }

    #[test]
    fn test_double_slash_in_path_is_kept() {
        let target = parse_url("http://a.com/b//c");
        assert_eq!(target.host, "a.com");
        assert_eq!(target.resource, "/b//c");
    }

    #[test]
    fn test_host_and_port() {
        let target = parse_url("http://127.0.0.1:8080/status");
        assert_eq!(target.host, "127.0.0.1:8080");
        assert_eq!(target.server_name(), "127.0.0.1");
        assert_eq!(target.explicit_port(), Some("8080"));

        let target = parse_url("example.com");
        assert_eq!(target.server_name(), "example.com");
        assert_eq!(target.explicit_port(), None);
    }

    #[test]
    fn test_ipv6_hosts() {
        let target = parse_url("http://[::1]:8443/");
        assert_eq!(target.server_name(), "::1");
        assert_eq!(target.explicit_port(), Some("8443"));

        let target = parse_url("[fe80::1]");
        assert_eq!(target.server_name(), "fe80::1");
        assert_eq!(target.explicit_port(), None);

        let target = Target { host: "::1".to_string(), resource: "/".to_string() };
        assert_eq!(target.server_name(), "::1");
        assert_eq!(target.explicit_port(), None);
    }
}
