mod cli;
mod error;
mod transcript;

use std::error::Error as _;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("error: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}
