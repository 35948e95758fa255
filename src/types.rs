//! Core data structures shared by the parser, the converters and the builder.

use std::fmt;

/// URI components extracted during parsing.
///
/// Every field is independently optional: `None` means the component was not
/// present in the input, while `Some("")` means it was present but empty
/// (e.g. `http://example.com/?` has an empty query).
///
/// `scheme` and `host` are lower-cased by the parser. All other fields are
/// kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriComponents {
    /// URI scheme without the trailing `:` (e.g. "https")
    pub scheme: Option<String>,
    /// User name from the userinfo part
    pub user: Option<String>,
    /// Password from the userinfo part
    pub pass: Option<String>,
    /// Host name or bracketed IP literal
    pub host: Option<String>,
    /// Explicit port number
    pub port: Option<u16>,
    /// Path including any leading slash (e.g. "/search")
    pub path: Option<String>,
    /// Query string without leading ? (e.g. "q=test")
    pub query: Option<String>,
    /// Fragment without leading # (e.g. "results")
    pub fragment: Option<String>,
}

impl UriComponents {
    /// Returns `true` if no component is present at all.
    pub fn is_empty(&self) -> bool {
        self.scheme.is_none()
            && self.user.is_none()
            && self.pass.is_none()
            && self.host.is_none()
            && self.port.is_none()
            && self.path.is_none()
            && self.query.is_none()
            && self.fragment.is_none()
    }

    /// Returns `true` if any authority component (user, pass, host, port) is present.
    pub fn has_authority(&self) -> bool {
        self.user.is_some() || self.pass.is_some() || self.host.is_some() || self.port.is_some()
    }

    /// Return a copy of these components with the host replaced.
    pub fn with_host(self, host: Option<String>) -> Self {
        Self { host, ..self }
    }

    /// Return a copy of these components with the path replaced.
    pub fn with_path(self, path: Option<String>) -> Self {
        Self { path, ..self }
    }

    /// Return a copy of these components with the query replaced.
    pub fn with_query(self, query: Option<String>) -> Self {
        Self { query, ..self }
    }
}

impl fmt::Display for UriComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::core::builder::build(self) {
            Some(uri) => f.write_str(&uri),
            None => Ok(()),
        }
    }
}

/// How the parser decided where (or whether) a host is present.
///
/// The variants are listed in the order the parser tries them; the first
/// one that applies wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostResolution {
    /// The generic splitter already found an authority or a scheme.
    Explicit,
    /// The input looks like `local@domain`, so it names a mailbox, not a host.
    Email,
    /// The residual path starts with `/`.
    AbsolutePath,
    /// A public-suffix-rooted domain prefixes the residual path.
    SniffedDomain {
        /// Host as typed
        host: String,
        /// Byte length of the consumed prefix
        len: usize,
    },
    /// Nothing host-like was found; everything stays in the path.
    BarePath,
}

/// Options controlling the ASCII/Unicode conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Whether the host is run through the IDNA transform.
    pub convert_host: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { convert_host: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_components() {
        let components = UriComponents::default();
        assert!(components.is_empty());
        assert!(!components.has_authority());
        assert_eq!(components.to_string(), "");
    }

    #[test]
    fn test_empty_path_is_not_absent() {
        let components = UriComponents {
            path: Some(String::new()),
            ..Default::default()
        };
        assert!(!components.is_empty());
        assert_ne!(components, UriComponents::default());
    }

    #[test]
    fn test_has_authority() {
        let components = UriComponents {
            port: Some(8080),
            ..Default::default()
        };
        assert!(components.has_authority());

        let components = UriComponents {
            scheme: Some("data".to_string()),
            path: Some("example.com".to_string()),
            ..Default::default()
        };
        assert!(!components.has_authority());
    }

    #[test]
    fn test_with_replaces_only_one_field() {
        let components = UriComponents {
            scheme: Some("http".to_string()),
            host: Some("пример.рф".to_string()),
            path: Some("/a".to_string()),
            ..Default::default()
        };

        let replaced = components.clone().with_host(Some("xn--e1afmkfd.xn--p1ai".to_string()));
        assert_eq!(replaced.host.as_deref(), Some("xn--e1afmkfd.xn--p1ai"));
        assert_eq!(replaced.scheme, components.scheme);
        assert_eq!(replaced.path, components.path);

        let replaced = components.clone().with_path(None).with_query(Some("q".to_string()));
        assert_eq!(replaced.path, None);
        assert_eq!(replaced.query.as_deref(), Some("q"));
        assert_eq!(replaced.host, components.host);
    }

    #[test]
    fn test_display_uses_builder() {
        let components = UriComponents {
            scheme: Some("https".to_string()),
            host: Some("example.com".to_string()),
            path: Some("/".to_string()),
            ..Default::default()
        };
        assert_eq!(components.to_string(), "https://example.com/");
    }

    #[test]
    fn test_default_options_convert_host() {
        assert!(ConvertOptions::default().convert_host);
    }
}
