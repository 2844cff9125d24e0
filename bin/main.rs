use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use timestamp_formats::{Report, DEFAULT_INPUT};

fn run() -> anyhow::Result<()> {
    let input = match env::args_os().nth(1) {
        Some(arg) => arg
            .into_string()
            .map_err(|arg| anyhow!("timestamp is not valid UTF-8: {arg:?}"))?,
        None => DEFAULT_INPUT.to_string(),
    };
    let report = Report::new(&input)?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{report}").context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::builder().init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
