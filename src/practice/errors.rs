//! Topic 4, continued: errors as values.

use crate::catalogue::Catalogue;
use crate::error::CatalogueError;
use chrono::{DateTime, Local};
use std::io::{self, Write};
use thiserror::Error;

pub fn register(catalogue: &mut Catalogue) -> Result<(), CatalogueError> {
    catalogue.register_titled("4.19", "custom error", custom_error)?;
    catalogue.register_titled("4.20", "negative square root", negative_sqrt)?;
    Ok(())
}

#[derive(Error, Debug)]
#[error("{what} (at {when})")]
pub struct TimestampedError {
    pub when: DateTime<Local>,
    pub what: String,
}

fn run() -> Result<(), TimestampedError> {
    Err(TimestampedError {
        when: Local::now(),
        what: "it didn't work".to_string(),
    })
}

fn custom_error(out: &mut dyn Write) -> io::Result<()> {
    if let Err(err) = run() {
        writeln!(out, "{err}")?;
    }
    Ok(())
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("cannot Sqrt negative number: {0}")]
pub struct NegativeSqrt(pub f64);

pub fn checked_sqrt(x: f64) -> Result<f64, NegativeSqrt> {
    if x < 0.0 {
        return Err(NegativeSqrt(x));
    }
    Ok(x.sqrt())
}

fn negative_sqrt(out: &mut dyn Write) -> io::Result<()> {
    for x in [2.0, -2.0] {
        match checked_sqrt(x) {
            Ok(root) => writeln!(out, "{root}")?,
            Err(err) => writeln!(out, "{err}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::dispatcher::{Dispatcher, Selection};
    use crate::practice::capture;

    #[test]
    fn test_checked_sqrt() {
        assert_eq!(checked_sqrt(4.0), Ok(2.0));
        assert_eq!(checked_sqrt(0.0), Ok(0.0));

        let err = checked_sqrt(-4.0).unwrap_err();
        assert_eq!(err, NegativeSqrt(-4.0));
        assert_eq!(err.0, -4.0);
        assert_eq!(err.to_string(), "cannot Sqrt negative number: -4");
    }

    #[test]
    fn test_square_root_entry_through_dispatcher() {
        fn square_root(out: &mut dyn Write) -> io::Result<()> {
            for x in [-4.0, 4.0] {
                match checked_sqrt(x) {
                    Ok(root) => writeln!(out, "{root:?}")?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            Ok(())
        }

        let mut catalogue = Catalogue::new();
        catalogue.register("square-root", square_root).unwrap();

        let mut buf = Vec::new();
        Dispatcher::new(&catalogue)
            .run(&Selection::ids(["square-root"]), &mut buf)
            .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "cannot Sqrt negative number: -4\n2.0\n"
        );
    }

    #[test]
    fn test_negative_sqrt_output() {
        assert_eq!(
            capture(negative_sqrt),
            "1.4142135623730951\ncannot Sqrt negative number: -2\n"
        );
    }

    #[test]
    fn test_custom_error_message() {
        let output = capture(custom_error);
        assert!(output.starts_with("it didn't work (at "));
        assert!(run().is_err());
    }
}
