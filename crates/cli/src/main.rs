use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;

use faststock_cli::{Config, Output, Session};

fn main() -> Result<()> {
    let config = Config::parse();
    faststock_observability::init(&config.tracing());

    let stdin = io::stdin();
    let mut options = config.session_options();
    options.echo = !stdin.is_terminal();

    let output = Output::stdout(!config.no_color, options.interactive);
    let mut session = Session::new(stdin.lock(), output, options);

    session.run().context("terminal I/O failed")?;

    tracing::info!(
        products = session.inventory().len(),
        "session ended; inventory discarded"
    );
    Ok(())
}
