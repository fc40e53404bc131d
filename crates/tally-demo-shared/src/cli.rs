#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Tally — shared counter demo

One counter model, several subscribed panes. Every mutation is broadcast
to whichever panes are mounted at that moment.

USAGE:
    tally-demo-shared [OPTIONS]

OPTIONS:
    --no-mouse      Disable mouse capture (keyboard only)
    --help, -h      Show this help message
    --version, -V   Show version

KEYS:
    +               Increment the counter
    -               Decrement the counter (negative values are allowed)
    2               Mount/unmount the second pane
    q / ctrl-c      Quit
";

/// Parsed command-line options.
#[derive(Debug, Clone)]
pub struct Opts {
    pub mouse: bool,
}

impl Opts {
    /// Parse `std::env::args`, exiting on `--help`/`--version` or bad input.
    pub fn parse() -> Self {
        let mut opts = Self { mouse: true };

        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--no-mouse" => opts.mouse = false,
                "--help" | "-h" => {
                    print!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("tally-demo-shared {VERSION}");
                    process::exit(0);
                }
                other => {
                    eprintln!("Unknown option: {other}");
                    eprintln!("Try --help.");
                    process::exit(2);
                }
            }
        }

        opts
    }
}
