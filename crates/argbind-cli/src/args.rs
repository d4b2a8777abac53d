use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// CLI arguments for the argbind binary.
#[derive(Parser, Debug)]
#[command(
    name = "argbind",
    version,
    about = "Resolve keyed JSON data into positional arguments for a JavaScript callable"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the positional arguments for a callable as a JSON array.
    Prepare(PrepareArgs),
    /// Print the decomposed parameter list of a callable as JSON.
    Params(ParamsArgs),
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// File holding the callable's source text, or `-` for stdin.
    #[arg(short = 'f', long)]
    pub function: PathBuf,

    /// Keyed data as JSON text.
    #[arg(short = 'd', long, conflicts_with = "data_file")]
    pub data: Option<String>,

    /// File holding the keyed data as JSON, or `-` for stdin.
    #[arg(long = "data-file")]
    pub data_file: Option<PathBuf>,

    /// Pretty-print the output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct ParamsArgs {
    /// File holding the callable's source text, or `-` for stdin.
    #[arg(short = 'f', long)]
    pub function: PathBuf,

    /// Pretty-print the output.
    #[arg(long)]
    pub pretty: bool,
}

/// Whether `path` names standard input.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}
