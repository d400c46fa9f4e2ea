use clap::Parser;

use genopts::args::Args;
use genopts::commands;
use genopts::error::GenoptsError;

fn main() {
    env_logger::init();

    let args = Args::parse();
    log::debug!("CLI args parsed: {:?}", args);

    match commands::run(&args) {
        Ok(()) => {}
        // clap prints its own usage or help and picks the exit code.
        Err(GenoptsError::Parse(e)) => e.exit(),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
