mod commands;
mod output;
mod shell;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::io;
use std::process;
use tracing::Level;

use commands::tvm::{FvArgs, PeriodsArgs, PvArgs, RateArgs};
use shell::menu::MenuStyle;
use shell::Session;

/// Time-value-of-money calculator
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Time-value-of-money calculator",
    long_about = "Solve for future value, present value, interest rate or number of \
                  periods. Run without a subcommand for the interactive menu, or use \
                  a subcommand for a one-shot calculation."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format for one-shot calculations
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Decimal places when displaying results
    #[arg(long, default_value_t = 2, global = true)]
    decimals: usize,

    /// Use the typed-number menu even on an interactive terminal
    #[arg(long, global = true)]
    numbered_menu: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Future value of a present amount plus periodic payments
    Fv(FvArgs),
    /// Present value needed to reach a future amount
    Pv(PvArgs),
    /// Interest rate (percent per period) that grows pv into fv
    Rate(RateArgs),
    /// Number of periods for pv to grow into fv
    Periods(PeriodsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Arrow-key navigation needs a terminal on both ends; piped sessions fall
/// back to the typed-number menu.
fn menu_style(numbered_menu: bool) -> MenuStyle {
    if !numbered_menu && atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout) {
        MenuStyle::ArrowKeys
    } else {
        MenuStyle::Numbered
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = match cli.command {
        Some(command) => command,
        None => {
            let stdin = io::stdin();
            let mut session = Session::new(stdin.lock(), io::stdout(), cli.decimals)
                .with_menu_style(menu_style(cli.numbered_menu));
            if let Err(e) = session.run() {
                eprintln!("{}: {}", "error".red().bold(), e);
                process::exit(1);
            }
            process::exit(0);
        }
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match command {
        Commands::Fv(args) => commands::tvm::run_fv(args),
        Commands::Pv(args) => commands::tvm::run_pv(args),
        Commands::Rate(args) => commands::tvm::run_rate(args),
        Commands::Periods(args) => commands::tvm::run_periods(args),
        Commands::Version => {
            println!("fincalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value, cli.decimals);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
