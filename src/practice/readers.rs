//! Topic 4, continued: the `Read` trait and reader adapters.

use crate::catalogue::Catalogue;
use crate::error::CatalogueError;
use std::io::{self, Read, Write};

pub fn register(catalogue: &mut Catalogue) -> Result<(), CatalogueError> {
    catalogue.register_titled("4.21", "reading in chunks", chunked_read)?;
    catalogue.register_titled("4.22", "endless reader", endless_reader)?;
    catalogue.register_titled("4.23", "rot13 reader", rot13_reader)?;
    Ok(())
}

fn chunked_read(out: &mut dyn Write) -> io::Result<()> {
    let mut r = "Hello, Reader!".as_bytes();
    let mut b = [0u8; 8];
    loop {
        let n = r.read(&mut b)?;
        writeln!(out, "n = {n} b = {b:?}")?;
        writeln!(out, "b[..n] = {:?}", String::from_utf8_lossy(&b[..n]))?;
        // a zero-length read marks end of stream
        if n == 0 {
            break;
        }
    }
    Ok(())
}

/// Emits an infinite stream of `b'A'`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndlessA;

impl Read for EndlessA {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        buf.fill(b'A');
        Ok(buf.len())
    }
}

/// Reads `rounds` buffers of varying size and checks every byte is `'A'`.
pub fn validate_endless<R: Read>(reader: &mut R, rounds: usize) -> io::Result<bool> {
    for round in 1..=rounds {
        let mut buf = vec![0u8; round * 3];
        let n = reader.read(&mut buf)?;
        if n == 0 || buf[..n].iter().any(|&byte| byte != b'A') {
            return Ok(false);
        }
    }
    Ok(true)
}

fn endless_reader(out: &mut dyn Write) -> io::Result<()> {
    let ok = validate_endless(&mut EndlessA, 8)?;
    writeln!(out, "valid: {ok}")?;

    let mut first = String::new();
    EndlessA.take(16).read_to_string(&mut first)?;
    writeln!(out, "{first}")
}

/// Wraps a reader and applies the rot13 substitution to ASCII letters.
pub struct Rot13Reader<R> {
    inner: R,
}

impl<R: Read> Rot13Reader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

fn rot13(byte: u8) -> u8 {
    match byte {
        b'a'..=b'z' => (byte - b'a' + 13) % 26 + b'a',
        b'A'..=b'Z' => (byte - b'A' + 13) % 26 + b'A',
        _ => byte,
    }
}

impl<R: Read> Read for Rot13Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for byte in &mut buf[..n] {
            *byte = rot13(*byte);
        }
        Ok(n)
    }
}

fn rot13_reader(out: &mut dyn Write) -> io::Result<()> {
    let mut r = Rot13Reader::new("Lbh penpxrq gur pbqr!".as_bytes());
    io::copy(&mut r, out)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::capture;

    #[test]
    fn test_chunked_read_stops_at_eof() {
        let output = capture(chunked_read);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "b[..n] = \"Hello, R\"");
        assert_eq!(lines[3], "b[..n] = \"eader!\"");
        assert!(lines[4].starts_with("n = 0"));
    }

    #[test]
    fn test_endless_reader() {
        assert!(validate_endless(&mut EndlessA, 10).unwrap());
        assert!(!validate_endless(&mut "AB".as_bytes(), 1).unwrap());
        assert!(!validate_endless(&mut "".as_bytes(), 1).unwrap());
        assert_eq!(capture(endless_reader), "valid: true\nAAAAAAAAAAAAAAAA\n");
    }

    #[test]
    fn test_rot13_reader() {
        let mut decoded = String::new();
        Rot13Reader::new("Lbh penpxrq gur pbqr!".as_bytes())
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, "You cracked the code!");
        assert_eq!(capture(rot13_reader), "You cracked the code!\n");
    }

    #[test]
    fn test_rot13_is_an_involution() {
        let inner = Rot13Reader::new("Hello, World 42".as_bytes());
        let mut twice = Rot13Reader::new(inner);
        let mut text = String::new();
        twice.read_to_string(&mut text).unwrap();
        assert_eq!(text, "Hello, World 42");
        assert!(twice.into_inner().into_inner().is_empty());
    }
}
