#![forbid(unsafe_code)]

//! Counter demo: component-local (ephemeral) state.
//!
//! The count lives inside [`pane::CounterPane`] and nowhere else. Nothing
//! outside the pane can observe or mutate it, and recreating the pane
//! (press `r`) discards it — that is the point of the demo, not a bug.

mod app;
mod cli;
mod msg;
mod pane;

use tally_runtime::{Program, ProgramConfig};

fn main() {
    let opts = cli::Opts::parse();
    init_logging();

    let config = ProgramConfig {
        mouse: opts.mouse,
        ..ProgramConfig::default()
    };

    match Program::with_config(app::EphemeralApp::new(), config) {
        Ok(mut program) => {
            if let Err(e) = program.run() {
                eprintln!("Runtime error: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            std::process::exit(1);
        }
    }
}

/// Install a stderr subscriber when `TALLY_LOG` is set (e.g. `TALLY_LOG=debug`).
fn init_logging() {
    if std::env::var_os("TALLY_LOG").is_some() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_env("TALLY_LOG"))
            .with_writer(std::io::stderr)
            .try_init();
    }
}
