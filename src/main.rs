use clap::Parser;
use imgaudit::cli::Cli;
use imgaudit::{build_products_path, report};

fn main() {
    let _args = Cli::parse();
    print!("{}", report::scan_report(&build_products_path()));
}
