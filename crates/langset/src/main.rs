use std::io::ErrorKind;
use std::process;

use clap::Parser;
use cli::{Args, Command};
use env_logger::Env;
use error::{LangsetError, LangsetResult};
use log::LevelFilter;

mod cli;
mod commands;
mod config;
mod corpus;
mod dataset;
mod error;
mod export;
mod pipeline;
mod prelude;
mod project;
mod sentence;

fn log_level(args: &Args) -> LevelFilter {
    match args.cmd {
        Command::Build(ref cmd) => cmd.log_level(),
        _ => LevelFilter::Info,
    }
}

async fn run(args: Args) -> LangsetResult<()> {
    match args.cmd {
        Command::Build(cmd) => cmd.execute().await,
        Command::Completions(cmd) => cmd.execute(),
        Command::Config(cmd) => cmd.execute(),
        Command::Init(cmd) => cmd.execute(),
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(
        Env::default().default_filter_or(log_level(&args).as_str()),
    )
    .format_target(false)
    .init();

    match run(args).await {
        Ok(()) => process::exit(0),
        Err(LangsetError::IO(e)) if e.kind() == ErrorKind::BrokenPipe => {
            process::exit(0)
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}
