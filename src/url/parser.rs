//! Permissive URI splitting with bare-domain detection.
//!
//! Parsing happens in two stages. A generic splitter breaks the input into
//! scheme, authority, path, query and fragment the way RFC 3986 appendix B
//! does, without validating anything. If that leaves no scheme and no host,
//! [`UriParser::resolve_host`] decides whether the input is a mailbox, an
//! absolute path, a bare domain or just a path.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::IdnUriError;
use crate::types::{HostResolution, UriComponents};
use crate::url::psl::{DomainSniffer, PslSniffer};

static URI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)^(?:(?P<scheme>[a-zA-Z][a-zA-Z0-9+.\-]*):)?",
        r"(?://(?P<authority>[^/?#]*))?",
        r"(?P<path>[^?#]*)",
        r"(?:\?(?P<query>[^#]*))?",
        r"(?:#(?P<fragment>.*))?$",
    ))
    .unwrap()
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s/?#:]+@[^@\s/?#:]+\.[^@\s/?#:]+$").unwrap()
});

/// `name:1234` or `name:1234/...` is a host and port, not a scheme.
static PORT_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:/|$)").unwrap());

/// Splits raw strings into [`UriComponents`].
///
/// The parser is generic over the [`DomainSniffer`] it consults for bare
/// domains; [`UriParser::new`] uses the Public Suffix List.
#[derive(Debug, Clone, Default)]
pub struct UriParser<S = PslSniffer> {
    sniffer: S,
}

impl UriParser<PslSniffer> {
    /// Create a parser backed by the Public Suffix List.
    pub fn new() -> Self {
        Self { sniffer: PslSniffer }
    }
}

impl<S: DomainSniffer> UriParser<S> {
    /// Create a parser with a custom domain sniffer.
    pub fn with_sniffer(sniffer: S) -> Self {
        Self { sniffer }
    }

    /// Parse `raw` into components.
    ///
    /// Returns `None` for empty input and for input with an invalid port.
    ///
    /// # Examples
    ///
    /// ```
    /// use idnuri::UriParser;
    ///
    /// let parts = UriParser::new().parse("example.com/foo/bar").unwrap();
    /// assert_eq!(parts.host.as_deref(), Some("example.com"));
    /// assert_eq!(parts.path.as_deref(), Some("/foo/bar"));
    /// ```
    pub fn parse(&self, raw: &str) -> Option<UriComponents> {
        self.try_parse(raw).ok()
    }

    /// Parse `raw` into components, reporting why parsing failed.
    pub fn try_parse(&self, raw: &str) -> Result<UriComponents, IdnUriError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(IdnUriError::Empty);
        }

        let mut parts = split(raw)?;

        // `www.example.com:8080/foo` splits as scheme "www.example.com".
        if self.is_host_port(&parts) {
            let scheme = parts.scheme.take().unwrap_or_default();
            let path = parts.path.take().unwrap_or_default();
            parts.path = Some(format!("{}:{}", scheme, path));
        }

        match self.resolve_host(raw, &parts) {
            HostResolution::SniffedDomain { host, len } => {
                let path = parts.path.take().unwrap_or_default();
                let (port, rest) = split_port(&path[len..])?;
                parts.host = Some(host);
                parts.port = port;
                parts.path = if rest.is_empty() {
                    None
                } else {
                    Some(rest.to_string())
                };
            }
            HostResolution::Explicit
            | HostResolution::Email
            | HostResolution::AbsolutePath
            | HostResolution::BarePath => {}
        }

        parts.scheme = parts.scheme.map(|scheme| scheme.to_ascii_lowercase());
        parts.host = parts.host.map(|host| host.to_lowercase());

        Ok(parts)
    }

    /// Decide where the host of `raw` is, given what the generic splitter found.
    ///
    /// The checks run in order and the first match wins: an explicit scheme
    /// or authority, an email address, an absolute path, a domain known to
    /// the sniffer, and finally a plain path.
    pub fn resolve_host(&self, raw: &str, parts: &UriComponents) -> HostResolution {
        let resolution = if parts.scheme.is_some() || parts.host.is_some() {
            HostResolution::Explicit
        } else if EMAIL_REGEX.is_match(raw) {
            HostResolution::Email
        } else {
            let path = parts.path.as_deref().unwrap_or("");
            if path.starts_with('/') {
                HostResolution::AbsolutePath
            } else {
                self.sniff(path)
            }
        };

        debug!(?resolution, "resolved host");
        resolution
    }

    /// A `name:digits` split is a host and port only when `name` is a domain.
    fn is_host_port(&self, parts: &UriComponents) -> bool {
        if parts.has_authority() {
            return false;
        }
        match (&parts.scheme, &parts.path) {
            (Some(scheme), Some(path)) if PORT_PATH_REGEX.is_match(path) => self
                .sniffer
                .extract(scheme)
                .is_some_and(|found| found.len == scheme.len()),
            _ => false,
        }
    }

    fn sniff(&self, path: &str) -> HostResolution {
        match self.sniffer.extract(path) {
            Some(found) if found.len <= path.len() && path.is_char_boundary(found.len) => {
                HostResolution::SniffedDomain {
                    host: found.host,
                    len: found.len,
                }
            }
            _ => HostResolution::BarePath,
        }
    }
}

/// Generic RFC 3986 style split, no host heuristics.
fn split(raw: &str) -> Result<UriComponents, IdnUriError> {
    let caps = URI_REGEX
        .captures(raw)
        .ok_or_else(|| IdnUriError::Malformed(raw.to_string()))?;

    let scheme = caps.name("scheme").map(|m| m.as_str());
    let authority = caps.name("authority").map(|m| m.as_str());
    let path = caps.name("path").map_or("", |m| m.as_str());

    let mut parts = UriComponents {
        scheme: scheme.map(str::to_string),
        query: caps.name("query").map(|m| m.as_str().to_string()),
        fragment: caps.name("fragment").map(|m| m.as_str().to_string()),
        ..Default::default()
    };

    match authority {
        Some(authority) => {
            split_authority(authority, &mut parts)?;
            if !path.is_empty() {
                parts.path = Some(path.to_string());
            }
        }
        None => parts.path = Some(path.to_string()),
    }

    Ok(parts)
}

/// Fill user, pass, host and port from `user:pass@host:port`.
fn split_authority(authority: &str, parts: &mut UriComponents) -> Result<(), IdnUriError> {
    let host_port = match authority.rfind('@') {
        Some(at) => {
            let userinfo = &authority[..at];
            match userinfo.split_once(':') {
                Some((user, pass)) => {
                    parts.user = Some(user.to_string());
                    parts.pass = Some(pass.to_string());
                }
                None => parts.user = Some(userinfo.to_string()),
            }
            &authority[at + 1..]
        }
        None => authority,
    };

    let (host, port) = if host_port.starts_with('[') {
        let close = host_port
            .find(']')
            .ok_or_else(|| IdnUriError::Malformed(authority.to_string()))?;
        let (host, rest) = host_port.split_at(close + 1);
        match rest.strip_prefix(':') {
            Some(port) => (host, Some(port)),
            None if rest.is_empty() => (host, None),
            None => return Err(IdnUriError::Malformed(authority.to_string())),
        }
    } else {
        match host_port.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };

    parts.host = Some(host.to_string());
    parts.port = match port {
        Some(port) => parse_port(port)?,
        None => None,
    };

    Ok(())
}

/// Split a `:port` prefix off the text following a sniffed domain.
///
/// Text that does not start with `:` and digits is returned whole as the path.
fn split_port(rest: &str) -> Result<(Option<u16>, &str), IdnUriError> {
    if let Some(after_colon) = rest.strip_prefix(':') {
        if PORT_PATH_REGEX.is_match(after_colon) {
            let end = after_colon.find('/').unwrap_or(after_colon.len());
            let port = parse_port(&after_colon[..end])?;
            return Ok((port, &after_colon[end..]));
        }
    }
    Ok((None, rest))
}

/// An empty port token means "no port"; anything else must fit in a `u16`.
fn parse_port(token: &str) -> Result<Option<u16>, IdnUriError> {
    if token.is_empty() {
        return Ok(None);
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdnUriError::InvalidPort(token.to_string()));
    }
    token
        .parse::<u16>()
        .map(Some)
        .map_err(|_| IdnUriError::InvalidPort(token.to_string()))
}
