use crate::command::fix::FixArgs;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "kt-package-fix",
    version,
    about = "Rewrite a misspelled package segment in Kotlin package and import declarations"
)]
pub struct FixCli {
    #[command(flatten)]
    pub args: FixArgs,

    /// Print debug logs (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}
