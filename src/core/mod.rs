//! Core URI conversion functionality.
//!
//! This module contains the conversion operations:
//! - Encoding URIs to their ASCII-only form
//! - Decoding URIs to their Unicode form
//! - Rebuilding URI strings from components
//! - Percent encoding of path and query bytes

pub mod builder;
pub mod decoder;
pub mod encoder;
pub mod percent;

// Re-export main functionality
pub use builder::build;
pub use decoder::{decode_components, to_utf8};
pub use encoder::{encode_components, parse, to_ascii, UriConverter};
pub use percent::{decode_all, encode_non_ascii};
