// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod platform;

use std::path::PathBuf;
use std::process::ExitCode;

use aula_logging::{aula_error, aula_warn};
use clap::{Parser, Subcommand};

use platform::config::{self, AppConfig, DEFAULT_CONFIG_PATH};

/// Small teaching exercises: a word counter, a calculator and a few drills.
#[derive(Parser, Debug)]
#[command(name = "aula")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// RON configuration file; missing files fall back to defaults
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask for a file name and count the words in it
    Count,
    /// Interactive calculator: Add, Subtract, Multiply, Divide, Exit
    Calc,
    /// Print FizzBuzz over the half-open range START..END
    Fizzbuzz {
        #[arg(long, allow_negative_numbers = true)]
        start: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        end: Option<i64>,
    },
    /// Print the squares of 1..=N
    Squares { n: u32 },
    /// Tell whether N is even or odd
    Parity {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Print a greeting followed by the numbers 0..=UPTO
    Hello {
        #[arg(long)]
        upto: Option<u32>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, config_error) = match config::load_config(&cli.config) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    platform::logging::initialize(config.log_destination, config.level_filter());
    if let Some(err) = config_error {
        aula_warn!("Using default configuration: {}", err);
        eprintln!("Warning: using default configuration: {err}");
    }

    match run(cli.command, &config) {
        Ok(code) => code,
        Err(err) => {
            aula_error!("Command failed: {:#}", err);
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &AppConfig) -> anyhow::Result<ExitCode> {
    use platform::commands;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Count => {
            let orchestrator = aula_engine::Orchestrator::with_defaults();
            let mut input = std::io::stdin().lock();
            let processed = commands::count_words(&mut input, &mut out, &orchestrator)?;
            Ok(if processed {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Command::Calc => {
            let mut input = std::io::stdin().lock();
            platform::effects::run_calculator(&mut input, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Fizzbuzz { start, end } => {
            let start = start.unwrap_or(config.fizzbuzz_start);
            let end = end.unwrap_or(config.fizzbuzz_end);
            commands::print_lines(&mut out, aula_core::fizzbuzz(start, end))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Squares { n } => {
            commands::print_lines(&mut out, aula_core::squares(n))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Parity { n } => {
            commands::print_lines(&mut out, [commands::describe_parity(n)])?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Hello { upto } => {
            let upto = upto.unwrap_or(config.greeting_upto);
            commands::print_lines(&mut out, aula_core::greeting_lines(upto))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
