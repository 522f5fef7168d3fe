// Ultimate tic-tac-toe engine over a line protocol

mod config;
mod driver;
mod io;
mod protocol;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use config::{Cli, EngineConfig};
use driver::Driver;

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );
    builder
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Stderr)
        .init();

    // 標準出力はプロトコル専用。ログは標準エラーへ
    if let Err(e) = run(&cli) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = EngineConfig::load(cli)?;
    log::info!("config: {config:?}");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Driver::new(config).run(stdin.lock(), stdout.lock())
}
