//! `user-filter`: filter a JSON collection of user records.
//!
//! Usage:
//!   user-filter --records users.json --filter filter.json [--role ADMIN] [--count]
//!
//! Records are read from stdin when `--records` is omitted or `-`.

use clap::Parser;
use std::io::{self, Write};
use user_filter_cli::{logger, run, Cli};

fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    match run(&cli, io::stdin().lock()) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if writeln!(stdout, "{output}").is_err() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}
