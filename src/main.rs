use std::io::{self, stdout, BufWriter, Write};

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, facts::HostFacts, logo::LogoResolver, source::OsSource};

mod config;
mod error;
mod facts;
mod logo;
mod memory;
mod panel;
mod parser;
mod source;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let source = OsSource::new();
    let config = Config::from_env(&source);
    init_tracing(&config);
    debug!(?config, "starting");

    let facts = HostFacts::collect(&source);
    let logo = LogoResolver::new(&config.logo_dir).resolve(&facts.distro_name);
    if logo.is_empty() {
        debug!(distro = %facts.distro_name, "no logo available, rendering panel only");
    } else {
        debug!(distro = %facts.distro_name, lines = logo.len(), "logo loaded");
    }

    if let Err(e) = print_rows(&panel::render(&facts, &logo)) {
        debug!(error = %e, "could not write to stdout");
    }
}

fn print_rows(rows: &[String]) -> io::Result<()> {
    let mut out = BufWriter::new(stdout().lock());
    writeln!(out)?;
    for row in rows {
        writeln!(out, "{row}")?;
    }
    out.flush()
}
