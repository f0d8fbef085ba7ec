use anyhow::Result;
use clap::Parser;
use pdf_glean::cli;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    if let Err(err) = cli::dispatch(args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
    Ok(())
}
