//! Public Suffix List integration for detecting bare domain names.
//!
//! Input such as `example.com/foo` has no scheme and no `//`, so a generic
//! splitter sees only a path. A [`DomainSniffer`] decides whether a prefix of
//! that path is really a host.

use psl::{List, Psl};
use tracing::trace;

/// A domain found at the start of a candidate string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SniffedDomain {
    /// The host exactly as it appeared in the candidate.
    pub host: String,
    /// Byte length of the candidate prefix occupied by the host.
    pub len: usize,
}

impl SniffedDomain {
    /// Create a match for `host`, consuming `host.len()` bytes.
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        let len = host.len();
        Self { host, len }
    }
}

/// Decides whether a bare string starts with a domain name.
///
/// Implementations must be side-effect free. Any internal failure is
/// reported as `None` ("no domain here").
pub trait DomainSniffer {
    /// Return the domain prefixing `candidate`, if there is one.
    fn extract(&self, candidate: &str) -> Option<SniffedDomain>;
}

impl<T: DomainSniffer + ?Sized> DomainSniffer for &T {
    fn extract(&self, candidate: &str) -> Option<SniffedDomain> {
        (**self).extract(candidate)
    }
}

impl<T: DomainSniffer + ?Sized> DomainSniffer for Box<T> {
    fn extract(&self, candidate: &str) -> Option<SniffedDomain> {
        (**self).extract(candidate)
    }
}

/// [`DomainSniffer`] backed by the compiled-in Public Suffix List.
///
/// The leading token of the candidate (everything before the first `/`, `:`,
/// `?`, `#`, `\` or whitespace) is accepted when, after IDNA conversion, it
/// has a registrable domain under a known public suffix. `example.com` and
/// `www.example.co.uk` match; `localhost`, `foo` and `readme.txt` do not.
#[derive(Debug, Clone, Copy, Default)]
pub struct PslSniffer;

impl PslSniffer {
    /// Create a new sniffer.
    pub fn new() -> Self {
        Self
    }
}

impl DomainSniffer for PslSniffer {
    fn extract(&self, candidate: &str) -> Option<SniffedDomain> {
        let token = leading_token(candidate);
        if token.is_empty() || token.contains('@') {
            return None;
        }

        if !has_known_suffix(token) {
            trace!(token = token, "no registrable domain under a known public suffix");
            return None;
        }

        Some(SniffedDomain::new(token))
    }
}

/// The part of `candidate` before the first host delimiter.
fn leading_token(candidate: &str) -> &str {
    let end = candidate
        .find(|c: char| matches!(c, '/' | ':' | '?' | '#' | '\\') || c.is_whitespace())
        .unwrap_or(candidate.len());
    &candidate[..end]
}

/// Check whether `host` is a registrable domain under a known public suffix.
fn has_known_suffix(host: &str) -> bool {
    // The list is keyed on lower-case ASCII labels.
    let ascii = match idna::domain_to_ascii(host) {
        Ok(ascii) => ascii,
        Err(_) => return false,
    };

    match List.domain(ascii.as_bytes()) {
        Some(domain) => domain.suffix().is_known(),
        None => false,
    }
}
