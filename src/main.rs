use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, WriteStyle};
use std::{io, process};
use tokio::runtime;
use waitfor::input::Input;

fn main() -> anyhow::Result<()> {
    let input = Input::parse();

    Builder::new()
        .write_style(WriteStyle::Auto)
        .filter_level(input.log_level())
        .init();

    let runtime = runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("could not start the runtime")?;

    if let Err(error) = runtime.block_on(waitfor::run(&input, io::stdout(), io::stderr())) {
        eprintln!("{}", error);
        drop(runtime);
        process::exit(error.exit_code());
    }
    Ok(())
}
