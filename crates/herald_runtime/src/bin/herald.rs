//! Herald CLI entry point.

use std::env;
use std::io;
use std::process::ExitCode;

use herald_parser::stdlib::standard_registry;
use herald_runtime::{Repl, run_batch};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    batch_mode: bool,
    no_banner: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliConfig, String> {
    let mut config = CliConfig::default();

    for arg in &args[1..] {
        match arg.as_str() {
            "--batch" | "-b" => config.batch_mode = true,
            "--no-banner" => config.no_banner = true,
            "--help" | "-h" => config.show_help = true,
            "--version" | "-V" => config.show_version = true,
            other => return Err(format!("unknown argument `{other}`")),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }
    if config.show_version {
        println!("herald {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let registry = standard_registry()?;

    if config.batch_mode {
        let stdin = io::stdin();
        run_batch(&registry, stdin.lock(), io::stdout())?;
        return Ok(());
    }

    let mut repl = Repl::new(registry)?;
    if config.no_banner {
        repl = repl.without_banner();
    }
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!("herald - chat command engine REPL");
    println!();
    println!("USAGE:");
    println!("  herald [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -b, --batch      Read commands from stdin, one per line");
    println!("      --no-banner  Skip the welcome banner");
    println!("  -h, --help       Show this help");
    println!("  -V, --version    Show version");
}
