//! Topic 5: bytes versus chars when transforming text.

use crate::catalogue::Catalogue;
use crate::error::CatalogueError;
use std::io::{self, Write};

pub fn register(catalogue: &mut Catalogue) -> Result<(), CatalogueError> {
    catalogue.register_titled("5.1", "upper-case bytes", upper_bytes)?;
    catalogue.register_titled("5.2", "upper-case chars", upper_chars)?;
    Ok(())
}

const SAMPLES: [&str; 2] = ["Hello 월드!", "straße"];

/// Upper-cases ASCII letters byte by byte; every other byte is copied as is,
/// so multi-byte characters pass through untouched.
pub fn to_upper_bytes(s: &str) -> String {
    let bytes: Vec<u8> = s
        .bytes()
        .map(|b| if b.is_ascii_lowercase() { b - (b'a' - b'A') } else { b })
        .collect();
    // only ASCII bytes were changed, so the result is still valid UTF-8
    String::from_utf8(bytes).unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// Upper-cases char by char, including mappings that expand (ß -> SS).
pub fn to_upper_chars(s: &str) -> String {
    s.chars().flat_map(char::to_uppercase).collect()
}

fn upper_bytes(out: &mut dyn Write) -> io::Result<()> {
    for sample in SAMPLES {
        writeln!(out, "{}", to_upper_bytes(sample))?;
    }
    Ok(())
}

fn upper_chars(out: &mut dyn Write) -> io::Result<()> {
    for sample in SAMPLES {
        writeln!(out, "{}", to_upper_chars(sample))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::capture;

    #[test]
    fn test_to_upper_bytes_leaves_non_ascii() {
        assert_eq!(to_upper_bytes("Hello 월드!"), "HELLO 월드!");
        assert_eq!(to_upper_bytes("straße"), "STRAßE");
        assert_eq!(to_upper_bytes(""), "");
    }

    #[test]
    fn test_to_upper_chars_expands() {
        assert_eq!(to_upper_chars("Hello 월드!"), "HELLO 월드!");
        assert_eq!(to_upper_chars("straße"), "STRASSE");
        assert_eq!(to_upper_chars("straße"), "straße".to_uppercase());
    }

    #[test]
    fn test_drill_output() {
        assert_eq!(capture(upper_bytes), "HELLO 월드!\nSTRAßE\n");
        assert_eq!(capture(upper_chars), "HELLO 월드!\nSTRASSE\n");
    }
}
