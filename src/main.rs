//! Binary entry point for `kt-package-fix`.

use clap::Parser;
use kt_package_fix::cli::FixCli;
use std::process;

fn main() {
    let cli = FixCli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = kt_package_fix::run(cli.args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
