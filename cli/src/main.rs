mod commands;
mod runner;
use crate::commands::Commands;
use crate::runner::{Options, Runnable, Runner};
use clap::Parser;
use std::process::ExitCode;
use urlcheck::error::Error;
use urlcheck::logger::Logger;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    options: Options,

    #[command(subcommand)]
    command: Commands,
}

/// Unified format of an error that ends the command
fn error_report(err: &Error) -> String {
    format!("\n{}\n{err}\n", console::style("Error").red().bold())
}

/// Derive a runner from the command and run it
async fn run(command: impl Runnable, options: &Options) -> ExitCode {
    match command.runner(options).run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_report(&err));

            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    Logger::init(if cli.options.verbose { "info" } else { "off" });

    if let Err(err) = color_eyre::install() {
        log::warn!("Failed to install error report handler: {err}");
    }

    // Match all commands here, in one place
    match cli.command {
        Commands::Check(cmd) => run(cmd, &cli.options).await,
        Commands::Example(cmd) => run(cmd, &cli.options).await,
        Commands::Examples(cmd) => run(cmd, &cli.options).await,
        Commands::Form(cmd) => run(cmd, &cli.options).await,
        Commands::Health(cmd) => run(cmd, &cli.options).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_report_shows_message_and_hint() {
        let report = error_report(&Error::new("Invalid timeout: soon", Some("Use \"30s\".")));

        assert_eq!(
            console::strip_ansi_codes(&report),
            "\nError\nInvalid timeout: soon\n\nUse \"30s\".\n"
        );
    }
}
