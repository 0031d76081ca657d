use clap::Parser;
use colored::Colorize;
use practice_catalogue::settings::DEFAULT_CONFIG_PATH;
use practice_catalogue::{build_catalogue, Catalogue, Dispatcher, Selection, Settings};
use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "practice", about = "Run numbered language drills")]
struct Cli {
    /// Entry ids to run, in order (e.g. 3.11 4.20). Defaults to the configured selection.
    ids: Vec<String>,

    /// Run every registered entry.
    #[arg(long, conflicts_with = "ids")]
    all: bool,

    /// List registered entries instead of running them.
    #[arg(long)]
    list: bool,

    /// Path to a TOML settings file.
    #[arg(long, env = "PRACTICE_CONFIG")]
    config: Option<PathBuf>,

    /// Do not print a header line before each entry.
    #[arg(long)]
    no_headers: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn settings(&self) -> Result<Settings, Box<dyn Error>> {
        self.settings_with_default(DEFAULT_CONFIG_PATH.as_ref())
    }

    /// An explicit `--config` must exist; `default_path` may be absent.
    fn settings_with_default(&self, default_path: &Path) -> Result<Settings, Box<dyn Error>> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::load_or_default(default_path)?,
        };
        settings.headers &= !self.no_headers;
        settings.color &= !self.no_color;
        Ok(settings)
    }

    fn selection(&self, settings: &Settings) -> Selection {
        if self.all {
            Selection::All
        } else if self.ids.is_empty() {
            settings.default_selection()
        } else {
            Selection::Ids(self.ids.clone())
        }
    }
}

fn list(catalogue: &Catalogue, out: &mut dyn Write) -> io::Result<()> {
    for entry in catalogue.iter() {
        let topic = entry.topic().map(|t| t.label()).unwrap_or("-");
        writeln!(out, "{:<6} {:<20} {}", entry.id().bold(), topic, entry.title())?;
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let settings = cli.settings()?;
    if !settings.color {
        colored::control::set_override(false);
    }

    let catalogue = build_catalogue()?;
    tracing::debug!(entries = catalogue.len(), "catalogue ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        list(&catalogue, &mut out)?;
        return Ok(());
    }

    let selection = cli.selection(&settings);
    Dispatcher::new(&catalogue)
        .with_headers(settings.headers)
        .with_color(settings.color)
        .run(&selection, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        tracing::error!(error = %err, "practice run failed");
        std::process::exit(1);
    }
}
