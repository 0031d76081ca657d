use crate::catalogue::{Catalogue, Entry};
use crate::error::CatalogueError;
use colored::Colorize;
use std::io::Write;

/// Which entries to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Ids(Vec<String>),
}

impl Selection {
    pub fn ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::Ids(ids.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Ids(ids) if ids.is_empty())
    }
}

/// Ids that were run, in the order they ran.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub executed: Vec<String>,
}

pub struct Dispatcher<'a> {
    catalogue: &'a Catalogue,
    headers: bool,
    color: bool,
}

impl<'a> Dispatcher<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self {
            catalogue,
            headers: false,
            color: false,
        }
    }

    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Runs the selected entries in order. The first unknown id aborts
    /// the run; entries before it have already produced their output.
    pub fn run(&self, selection: &Selection, out: &mut dyn Write) -> Result<RunReport, CatalogueError> {
        let mut report = RunReport::default();

        match selection {
            Selection::All => {
                for entry in self.catalogue.iter() {
                    self.invoke(entry, out)?;
                    report.executed.push(entry.id().to_string());
                }
            }
            Selection::Ids(ids) => {
                for id in ids {
                    let entry = self.catalogue.get(id).inspect_err(|_| {
                        tracing::warn!(id = %id, "unknown entry requested, aborting run");
                    })?;
                    self.invoke(entry, out)?;
                    report.executed.push(entry.id().to_string());
                }
            }
        }

        tracing::info!(executed = report.executed.len(), "run finished");
        Ok(report)
    }

    fn invoke(&self, entry: &Entry, out: &mut dyn Write) -> Result<(), CatalogueError> {
        tracing::debug!(id = entry.id(), "running entry");
        if self.headers {
            writeln!(out, "{}", self.header(entry))?;
        }
        entry.run(out)?;
        Ok(())
    }

    fn header(&self, entry: &Entry) -> String {
        let line = if entry.title().is_empty() {
            format!("== {} ==", entry.id())
        } else {
            format!("== {} {} ==", entry.id(), entry.title())
        };
        if self.color {
            line.bold().cyan().to_string()
        } else {
            line
        }
    }
}
