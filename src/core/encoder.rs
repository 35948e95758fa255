//! Conversion of URIs into their ASCII-only form.
//!
//! This module provides the main API: the [`UriConverter`] and the free
//! functions [`to_ascii`] and [`parse`] built on a default converter.

use tracing::warn;

use crate::core::builder::build;
use crate::core::decoder::decode_components;
use crate::core::percent::encode_non_ascii;
use crate::error::IdnUriError;
use crate::types::{ConvertOptions, UriComponents};
use crate::url::normalizer::to_ascii_host;
use crate::url::parser::UriParser;
use crate::url::psl::{DomainSniffer, PslSniffer};

/// Replace the host with its punycode form and percent-encode non-ASCII bytes
/// in the path and query. The fragment is left untouched.
///
/// Fails if the IDNA transform rejects the host.
pub fn encode_components(
    parts: UriComponents,
    options: ConvertOptions,
) -> Result<UriComponents, IdnUriError> {
    let host = match parts.host.as_deref() {
        Some(host) if options.convert_host => Some(to_ascii_host(host)?),
        _ => parts.host.clone(),
    };
    let path = parts.path.as_deref().map(encode_non_ascii);
    let query = parts.query.as_deref().map(encode_non_ascii);

    Ok(parts.with_host(host).with_path(path).with_query(query))
}

/// Convert a URI to its ASCII-only form.
///
/// Returns `None` if `uri` is `None`, cannot be parsed, or has a host the
/// IDNA transform rejects.
///
/// # Arguments
///
/// * `uri` - The URI to convert
/// * `convert_host` - Whether to punycode-encode the host
///
/// # Examples
///
/// ```
/// use idnuri::to_ascii;
///
/// assert_eq!(
///     to_ascii(Some("http://пример.рф/страница"), true).as_deref(),
///     Some("http://xn--e1afmkfd.xn--p1ai/%D1%81%D1%82%D1%80%D0%B0%D0%BD%D0%B8%D1%86%D0%B0")
/// );
/// assert_eq!(to_ascii(None, true), None);
/// ```
pub fn to_ascii(uri: Option<&str>, convert_host: bool) -> Option<String> {
    UriConverter::new().convert_host(convert_host).to_ascii(uri?)
}

/// Split a URI into its components.
///
/// Returns `None` if `uri` is `None`, empty or whitespace-only, or has an
/// invalid port.
///
/// # Examples
///
/// ```
/// use idnuri::parse;
///
/// let parts = parse(Some("HTTPS://www.EXAMPLE.cOm/")).unwrap();
/// assert_eq!(parts.scheme.as_deref(), Some("https"));
/// assert_eq!(parts.host.as_deref(), Some("www.example.com"));
/// assert_eq!(parts.path.as_deref(), Some("/"));
/// ```
pub fn parse(uri: Option<&str>) -> Option<UriComponents> {
    UriConverter::new().parse(uri?)
}

/// Converter between Unicode and ASCII URI forms.
///
/// Holds the parser (and its domain sniffer) together with the conversion
/// options, so repeated conversions share one configuration.
///
/// # Examples
///
/// ```
/// use idnuri::UriConverter;
///
/// let converter = UriConverter::new().convert_host(false);
/// assert_eq!(
///     converter.to_ascii("http://пример.рф/").as_deref(),
///     Some("http://пример.рф/")
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct UriConverter<S = PslSniffer> {
    parser: UriParser<S>,
    options: ConvertOptions,
}

impl UriConverter<PslSniffer> {
    /// Create a converter with default settings.
    pub fn new() -> Self {
        Self {
            parser: UriParser::new(),
            options: ConvertOptions::default(),
        }
    }
}

impl<S: DomainSniffer> UriConverter<S> {
    /// Create a converter that detects bare domains with `sniffer`.
    pub fn with_sniffer(sniffer: S) -> Self {
        Self {
            parser: UriParser::with_sniffer(sniffer),
            options: ConvertOptions::default(),
        }
    }

    /// Set whether the host goes through the IDNA transform.
    pub fn convert_host(mut self, convert_host: bool) -> Self {
        self.options.convert_host = convert_host;
        self
    }

    /// The options this converter applies.
    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Split a URI into its components.
    pub fn parse(&self, uri: &str) -> Option<UriComponents> {
        self.parser.parse(uri)
    }

    /// Convert a URI to its ASCII-only form.
    pub fn to_ascii(&self, uri: &str) -> Option<String> {
        let parts = self.parser.parse(uri)?;
        match encode_components(parts, self.options) {
            Ok(encoded) => build(&encoded),
            Err(err) => {
                warn!(%err, "cannot convert URI to ASCII");
                None
            }
        }
    }

    /// Convert a URI to its human-readable Unicode form.
    pub fn to_utf8(&self, uri: &str) -> Option<String> {
        let parts = self.parser.parse(uri)?;
        build(&decode_components(parts, self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::psl::SniffedDomain;

    #[test]
    fn test_to_ascii_basic() {
        assert_eq!(
            to_ascii(Some("http://здоровьесемьи21.рф/услуги"), true).as_deref(),
            Some("http://xn--21-dlchgakm9aqaxq6me.xn--p1ai/%D1%83%D1%81%D0%BB%D1%83%D0%B3%D0%B8")
        );
    }

    #[test]
    fn test_to_ascii_none_and_empty() {
        assert_eq!(to_ascii(None, true), None);
        assert_eq!(to_ascii(Some(""), true), None);
        assert_eq!(to_ascii(Some("   "), false), None);
    }

    #[test]
    fn test_to_ascii_without_host_conversion() {
        assert_eq!(
            to_ascii(Some("http://пример.рф/страница"), false).as_deref(),
            Some("http://пример.рф/%D1%81%D1%82%D1%80%D0%B0%D0%BD%D0%B8%D1%86%D0%B0")
        );
    }

    #[test]
    fn test_to_ascii_leaves_fragment() {
        assert_eq!(
            to_ascii(Some("http://php.net/#раздел"), true).as_deref(),
            Some("http://php.net/#раздел")
        );
    }

    #[test]
    fn test_encode_components() {
        let parts = UriComponents {
            host: Some("пример.рф".to_string()),
            path: Some("/я".to_string()),
            query: Some("q=я".to_string()),
            fragment: Some("я".to_string()),
            ..Default::default()
        };
        let encoded = encode_components(parts, ConvertOptions::default()).unwrap();
        assert_eq!(encoded.host.as_deref(), Some("xn--e1afmkfd.xn--p1ai"));
        assert_eq!(encoded.path.as_deref(), Some("/%D1%8F"));
        assert_eq!(encoded.query.as_deref(), Some("q=%D1%8F"));
        assert_eq!(encoded.fragment.as_deref(), Some("я"));
    }

    #[test]
    fn test_encode_components_rejected_host() {
        let parts = UriComponents {
            host: Some("xn--a.рф".to_string()),
            path: Some("/".to_string()),
            ..Default::default()
        };
        assert_eq!(
            encode_components(parts.clone(), ConvertOptions::default()),
            Err(IdnUriError::Idna("xn--a.рф".to_string()))
        );

        let options = ConvertOptions {
            convert_host: false,
        };
        assert!(encode_components(parts, options).is_ok());
    }

    #[test]
    fn test_to_ascii_rejected_host() {
        assert_eq!(to_ascii(Some("http://xn--a.рф/"), true), None);
    }

    #[test]
    fn test_parse_none() {
        assert_eq!(parse(None), None);
        assert_eq!(parse(Some("")), None);
        assert_eq!(parse(Some("   ")), None);
    }

    struct Everything;

    impl DomainSniffer for Everything {
        fn extract(&self, candidate: &str) -> Option<SniffedDomain> {
            let end = candidate.find('/').unwrap_or(candidate.len());
            Some(SniffedDomain::new(&candidate[..end]))
        }
    }

    #[test]
    fn test_custom_sniffer() {
        let converter = UriConverter::with_sniffer(Everything);
        assert_eq!(
            converter.to_ascii("пример/страница").as_deref(),
            Some("xn--e1afmkfd/%D1%81%D1%82%D1%80%D0%B0%D0%BD%D0%B8%D1%86%D0%B0")
        );
        assert!(converter.options().convert_host);
    }

    #[test]
    fn test_converter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UriConverter>();
    }
}
