use anyhow::Result;
use argbind_cli::args::CliArgs;
use argbind_cli::{driver, tracing_config};
use clap::Parser;

fn main() -> Result<()> {
    tracing_config::init_tracing();
    let args = CliArgs::parse();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    driver::run(&args, stdin.lock(), stdout.lock())
}
