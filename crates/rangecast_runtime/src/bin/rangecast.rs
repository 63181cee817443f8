//! Rangecast CLI entry point.

use rangecast_runtime::{Console, demo_gazetteer, load_dataset};
use rangecast_parser::CommandEngine;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    dataset: Option<PathBuf>,
    parse_once: Option<String>,
    suggestion_limit: Option<usize>,
    quiet: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-q" | "--quiet" => config.quiet = true,
            "-p" | "--parse" => {
                i += 1;
                if i >= args.len() {
                    return Err("--parse requires a command string".into());
                }
                config.parse_once = Some(args[i].clone());
            }
            "--limit" => {
                i += 1;
                if i >= args.len() {
                    return Err("--limit requires a value".into());
                }
                config.suggestion_limit = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --limit value: {}", args[i]))?,
                );
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.dataset.is_some() {
                    return Err("only one dataset file may be given".into());
                }
                config.dataset = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("rangecast {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let gazetteer = match &config.dataset {
        Some(path) => load_dataset(path)?,
        None => demo_gazetteer(),
    };
    let engine = CommandEngine::new(gazetteer);

    // One-shot mode: parse a single command and print the report as JSON.
    if let Some(text) = &config.parse_once {
        let report = engine.parse(text);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut console = Console::new(engine)?;
    if config.quiet {
        console = console.without_banner();
    }
    if let Some(limit) = config.suggestion_limit {
        console = console.with_suggestion_limit(limit);
    }
    console.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mRangecast\x1b[0m - Natural-language command parsing for range-ring tasking

\x1b[1mUSAGE:\x1b[0m
    rangecast [OPTIONS] [DATASET]

\x1b[1mARGUMENTS:\x1b[0m
    [DATASET]    JSON gazetteer file with \"countries\" and \"cities\" lists
                 (a built-in demo gazetteer is used when omitted)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -p, --parse TEXT   Parse one command, print the report as JSON, and exit
    -q, --quiet        Skip the welcome banner
    --limit N          Suggestions shown by :countries and :cities

\x1b[1mEXAMPLES:\x1b[0m
    rangecast                                 Start the interactive console
    rangecast places.json                     Console over a custom gazetteer
    rangecast -p \"Generate a range ring from Iran\"
    rangecast --limit 5

\x1b[1mCONSOLE COMMANDS:\x1b[0m
    :help              Show console help
    :countries TERM    Ranked country suggestions
    :cities TERM       Ranked city suggestions
    :quit              Exit (also Ctrl+D)"
    );
}
