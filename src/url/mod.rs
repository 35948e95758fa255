//! URI splitting and host handling.
//!
//! This module contains the host-related functionality:
//! - Generic URI splitting and bare-domain detection
//! - Public Suffix List (PSL) domain sniffing
//! - IDNA host conversion

pub mod normalizer;
pub mod parser;
pub mod psl;

// Re-export main functionality
pub use normalizer::{to_ascii_host, to_unicode_host};
pub use parser::UriParser;
pub use self::psl::{DomainSniffer, PslSniffer, SniffedDomain};
