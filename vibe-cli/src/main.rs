//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use vibe_cli::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match vibe_cli::run() {
        Ok(()) => {}
        // Help and version go to stdout with status 0; usage errors exit 2.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("vibe-radar: {err}");
            std::process::exit(1);
        }
    }
}
