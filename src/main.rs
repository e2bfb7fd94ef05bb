//! Ana SUPERIA console smoke test
//!
//! Prints a fixed transcript (greeting, arithmetic, language list, GPU
//! record and a closing banner) to standard output.

use std::io::{self, Write};

use ana_smoke::{cli::Cli, common::logging, demo, Script};

fn main() {
    logging::init_cli();

    let cli = Cli::parse_lenient();
    tracing::debug!(ignored = cli.ignored(), "process arguments ignored");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = demo::run(&mut out, &Script::default()).and_then(|()| out.flush().map_err(Into::into));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
