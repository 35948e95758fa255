//! Host conversion between Unicode and ASCII-compatible encoding.

use tracing::warn;

use crate::error::IdnUriError;

/// Convert a host to its ASCII-compatible (punycode) form.
///
/// Each Unicode label becomes an `xn--` label; ASCII labels are lower-cased.
/// Empty hosts and bracketed IP literals are returned unchanged.
///
/// # Examples
///
/// ```
/// use idnuri::to_ascii_host;
///
/// assert_eq!(to_ascii_host("пример.рф").unwrap(), "xn--e1afmkfd.xn--p1ai");
/// assert_eq!(to_ascii_host("php.net").unwrap(), "php.net");
/// ```
pub fn to_ascii_host(host: &str) -> Result<String, IdnUriError> {
    if is_passthrough(host) {
        return Ok(host.to_string());
    }

    idna::domain_to_ascii(host).map_err(|_| IdnUriError::Idna(host.to_string()))
}

/// Convert a host from punycode back to Unicode.
///
/// Inverse of [`to_ascii_host`]. Labels that are not punycode are left as they
/// are.
///
/// # Examples
///
/// ```
/// use idnuri::to_unicode_host;
///
/// assert_eq!(to_unicode_host("xn--e1afmkfd.xn--p1ai").unwrap(), "пример.рф");
/// ```
pub fn to_unicode_host(host: &str) -> Result<String, IdnUriError> {
    if is_passthrough(host) {
        return Ok(host.to_string());
    }

    let (unicode, result) = idna::domain_to_unicode(host);
    result.map_err(|_| IdnUriError::Idna(host.to_string()))?;
    Ok(unicode)
}

/// Apply `convert` to `host`, keeping the original host if the transform fails.
pub(crate) fn convert_or_keep(
    host: String,
    convert: fn(&str) -> Result<String, IdnUriError>,
) -> String {
    match convert(&host) {
        Ok(converted) => converted,
        Err(err) => {
            warn!(%err, "keeping host unconverted");
            host
        }
    }
}

fn is_passthrough(host: &str) -> bool {
    host.is_empty() || host.starts_with('[')
}
