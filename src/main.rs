//! pdfmerge - merge PDF files into a single document.

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    process::exit(pdfmerge::cli::run_cli(std::env::args_os()));
}
