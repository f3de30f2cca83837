use clap::Parser;

/// Scan the product image directory and report metadata for a sample of files.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {}
