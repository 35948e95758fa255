//! Byte-level percent encoding for path and query components.
//!
//! Only bytes outside the printable ASCII range are touched when encoding, so
//! existing escapes and reserved delimiters survive untouched.

use percent_encoding::{percent_decode, percent_encode, AsciiSet, CONTROLS};

/// Bytes below `0x20`. `0x7F` passes through; non-ASCII bytes are always
/// encoded by `percent_encode` regardless of the set.
const NON_PRINTABLE: &AsciiSet = &CONTROLS.remove(0x7F);

/// Percent-encode every byte outside `0x20..=0x7F`.
///
/// Multi-byte characters yield one `%XX` triplet per UTF-8 byte, with
/// uppercase hex digits. Everything else, including `%`, is left alone, so
/// the function is a no-op on ASCII input.
///
/// # Examples
///
/// ```
/// use idnuri::encode_non_ascii;
///
/// assert_eq!(encode_non_ascii("/поиск"), "/%D0%BF%D0%BE%D0%B8%D1%81%D0%BA");
/// assert_eq!(encode_non_ascii("/a%20b"), "/a%20b");
/// ```
pub fn encode_non_ascii(input: &str) -> String {
    percent_encode(input.as_bytes(), NON_PRINTABLE).to_string()
}

/// Decode every well-formed `%XX` escape.
///
/// Malformed escapes (a non-hex digit, or a `%` too close to the end) stay as
/// literal text. Adjacent escapes are decoded as one run; a run that does not
/// form valid UTF-8, such as legacy single-byte encodings, is kept encoded
/// whole, including any ASCII escapes inside it: `%41%C7` stays `%41%C7`,
/// while `%41 %C7` is two runs and becomes `A %C7`.
///
/// # Examples
///
/// ```
/// use idnuri::decode_all;
///
/// assert_eq!(decode_all("/%D0%BF%D0%BE%D0%B8%D1%81%D0%BA"), "/поиск");
/// assert_eq!(decode_all("%41%a"), "A%a");
/// assert_eq!(decode_all("%C7%E0"), "%C7%E0");
/// assert_eq!(decode_all("%41%C7"), "%41%C7");
/// assert_eq!(decode_all("%41 %C7"), "A %C7");
/// ```
pub fn decode_all(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut output = String::with_capacity(input.len());
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let run_end = escape_run_end(bytes, i);
        if run_end == i {
            i += 1;
            continue;
        }

        output.push_str(&input[literal_start..i]);
        let run = &input[i..run_end];
        match percent_decode(run.as_bytes()).decode_utf8() {
            Ok(decoded) => output.push_str(&decoded),
            Err(_) => output.push_str(run),
        }
        i = run_end;
        literal_start = i;
    }

    output.push_str(&input[literal_start..]);
    output
}

/// End of the run of consecutive well-formed escapes starting at `start`.
///
/// Returns `start` itself when no escape begins there.
fn escape_run_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while is_escape_at(bytes, end) {
        end += 3;
    }
    end
}

fn is_escape_at(bytes: &[u8], i: usize) -> bool {
    i + 2 < bytes.len()
        && bytes[i] == b'%'
        && bytes[i + 1].is_ascii_hexdigit()
        && bytes[i + 2].is_ascii_hexdigit()
}
