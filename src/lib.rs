//! idnuri - Unicode and ASCII forms of URIs
//!
//! This crate converts human-typed or machine-supplied URIs between two
//! canonical representations:
//!
//! - an **ASCII** form that is safe to send over the wire: internationalized
//!   host names are punycode-encoded and non-ASCII bytes in the path and
//!   query are percent-encoded;
//! - a **Unicode** form for display: the reverse transform.
//!
//! # Quick Start
//!
//! ```
//! use idnuri::{parse, to_ascii, to_utf8};
//!
//! let ascii = to_ascii(Some("http://пример.рф/страница"), true).unwrap();
//! assert_eq!(
//!     ascii,
//!     "http://xn--e1afmkfd.xn--p1ai/%D1%81%D1%82%D1%80%D0%B0%D0%BD%D0%B8%D1%86%D0%B0"
//! );
//! assert_eq!(to_utf8(Some(ascii.as_str()), true).unwrap(), "http://пример.рф/страница");
//!
//! // Bare domains are recognized through the Public Suffix List
//! let parts = parse(Some("example.com/foo/bar")).unwrap();
//! assert_eq!(parts.host.as_deref(), Some("example.com"));
//! assert_eq!(parts.path.as_deref(), Some("/foo/bar"));
//! ```
//!
//! # Parsing
//!
//! Parsing is permissive. Input without a scheme or `//` is examined in
//! order: an email address (`mail@php.net`) keeps no host, an absolute path
//! (`/search`) keeps no host, a string starting with a registrable domain
//! (`yandex.ru/search`) gets that domain as its host, and anything else is a
//! plain path.
//!
//! # Error Handling
//!
//! The conversion functions return `Option`: `None` means the input was
//! absent, empty, or had an invalid port, and [`to_ascii`] also returns
//! `None` when the IDNA transform rejects the host. [`UriParser::try_parse`] reports
//! the reason as an [`IdnUriError`]. Malformed percent escapes never cause a
//! failure; they are kept as literal text.

// Re-export main conversion functions
pub use self::core::{parse, to_ascii, to_utf8, UriConverter};

// Re-export component operations
pub use self::core::{build, decode_all, decode_components, encode_components, encode_non_ascii};
pub use url::{
    to_ascii_host, to_unicode_host, DomainSniffer, PslSniffer, SniffedDomain, UriParser,
};

// Re-export public types
pub use error::IdnUriError;
pub use types::{ConvertOptions, HostResolution, UriComponents};

// Module declarations
pub mod core;
pub mod error;
pub mod types;
pub mod url;
