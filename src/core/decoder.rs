//! Conversion of URIs into their human-readable Unicode form.

use crate::core::encoder::UriConverter;
use crate::core::percent::decode_all;
use crate::types::{ConvertOptions, UriComponents};
use crate::url::normalizer::{convert_or_keep, to_unicode_host};

/// Replace a punycode host with its Unicode form and percent-decode the path
/// and query. The fragment is left untouched.
pub fn decode_components(parts: UriComponents, options: ConvertOptions) -> UriComponents {
    let host = match parts.host.clone() {
        Some(host) if options.convert_host => Some(convert_or_keep(host, to_unicode_host)),
        host => host,
    };
    let path = parts.path.as_deref().map(decode_all);
    let query = parts.query.as_deref().map(decode_all);

    parts.with_host(host).with_path(path).with_query(query)
}

/// Convert a URI to its human-readable Unicode form.
///
/// Returns `None` if `uri` is `None` or cannot be parsed.
///
/// # Arguments
///
/// * `uri` - The URI to convert
/// * `convert_host` - Whether to decode a punycode host
///
/// # Examples
///
/// ```
/// use idnuri::to_utf8;
///
/// assert_eq!(
///     to_utf8(Some("xn--d1acpjx3f.xn--p1ai/search"), true).as_deref(),
///     Some("яндекс.рф/search")
/// );
/// ```
pub fn to_utf8(uri: Option<&str>, convert_host: bool) -> Option<String> {
    UriConverter::new().convert_host(convert_host).to_utf8(uri?)
}
