//! The drills themselves, one module per topic.
//!
//! Every drill is a plain `fn(&mut dyn Write) -> io::Result<()>` so it can
//! be registered in a [`Catalogue`] and run into any sink.

use crate::catalogue::Catalogue;
use crate::error::CatalogueError;
use itertools::Itertools;
use std::fmt::Display;

pub mod basics;
pub mod composite;
pub mod errors;
pub mod flow;
pub mod methods;
pub mod readers;
pub mod strings;

pub fn register_all(catalogue: &mut Catalogue) -> Result<(), CatalogueError> {
    basics::register(catalogue)?;
    flow::register(catalogue)?;
    composite::register(catalogue)?;
    methods::register(catalogue)?;
    errors::register(catalogue)?;
    readers::register(catalogue)?;
    strings::register(catalogue)?;
    Ok(())
}

/// Space-separated listing in brackets, e.g. `[2 3 5]`.
pub(crate) fn listing<T: Display>(items: &[T]) -> String {
    format!("[{}]", items.iter().join(" "))
}

#[cfg(test)]
pub(crate) fn capture(action: crate::catalogue::Action) -> String {
    let mut buf = Vec::new();
    action(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}
