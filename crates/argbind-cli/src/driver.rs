//! Command execution: read inputs, prepare or decompose, write JSON.

use crate::args::{CliArgs, Command, ParamsArgs, PrepareArgs, is_stdin};
use anyhow::{Context, Result, bail};
use argbind::{DataSource, ParameterList, build_with};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Run one command, reading `-` inputs from `stdin` and writing to `out`.
pub fn run(args: &CliArgs, mut stdin: impl Read, mut out: impl Write) -> Result<()> {
    match &args.command {
        Command::Prepare(prepare) => run_prepare(prepare, &mut stdin, &mut out),
        Command::Params(params) => run_params(params, &mut stdin, &mut out),
    }
}

fn run_prepare(args: &PrepareArgs, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    if is_stdin(&args.function) && args.data_file.as_deref().is_some_and(is_stdin) {
        bail!("--function and --data-file cannot both read from stdin");
    }

    let source = read_input(&args.function, stdin)
        .with_context(|| format!("failed to read function source {}", args.function.display()))?;
    let data_text = match (&args.data, &args.data_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(
            read_input(path, stdin)
                .with_context(|| format!("failed to read data {}", path.display()))?,
        ),
        (None, None) => None,
    };

    let data = match data_text.as_deref().map(DataSource::try_decode) {
        Some(Ok(data)) => data,
        Some(Err(err)) => {
            warn!(error = %err, "data could not be decoded, preparing no arguments");
            DataSource::new()
        }
        None => DataSource::new(),
    };

    let parameters = ParameterList::from_source(&source);
    debug!(
        parameters = parameters.len(),
        entries = data.len(),
        "preparing arguments"
    );
    let arguments = build_with(&parameters, &data);
    write_json(out, &arguments, args.pretty)
}

fn run_params(args: &ParamsArgs, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    let source = read_input(&args.function, stdin)
        .with_context(|| format!("failed to read function source {}", args.function.display()))?;
    let parameters = ParameterList::from_source(&source);
    write_json(out, parameters.parameters(), args.pretty)
}

fn read_input(path: &Path, stdin: &mut dyn Read) -> std::io::Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        stdin.read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    out.flush().context("failed to flush output")
}
