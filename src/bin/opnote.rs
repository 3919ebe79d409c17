//! Command-line interface for opnote
//! This binary parses option notation and prints the resulting document in one of the
//! registered output formats.
//!
//! Usage:
//!   opnote `<notation>` [--format `<format>`]   - Parse a notation string
//!   opnote [-]                                 - Parse notation read from stdin
//!   opnote --list-formats                      - List available output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use opnote::notation::config::{Loader, OpnoteConfig};
use opnote::notation::formats::FormatRegistry;
use opnote::notation::parsing::{parse_with_diagnostics, ParseOptions};
use opnote::notation::validation::validate_source;
use std::io::Read;

fn main() {
    let matches = Command::new("opnote")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse product option notation into a structured document")
        .arg(
            Arg::new("input")
                .help("Notation to parse ('-' or absent reads stdin)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'json', 'yaml', 'tag')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("diagnostics")
                .long("diagnostics")
                .short('d')
                .help("Report input that had to be read leniently")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Fail with status 2 if a row does not line up with the labels")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    // listing ignores --config
    if matches.get_flag("list-formats") {
        handle_list_formats_command(&FormatRegistry::with_defaults());
        return;
    }

    let config = load_config(&matches);
    let registry = FormatRegistry::for_output(&config.output);

    let source = read_source(matches.get_one::<String>("input").map(String::as_str));
    handle_parse_command(
        &source,
        &config,
        &registry,
        matches.get_flag("diagnostics"),
        matches.get_flag("check"),
    );
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_config(matches: &ArgMatches) -> OpnoteConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.with_format(format);
    }

    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn read_source(input: Option<&str>) -> String {
    match input {
        Some(text) if text != "-" => text.to_string(),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .unwrap_or_else(|e| {
                    eprintln!("Error reading stdin: {}", e);
                    std::process::exit(1);
                });
            source
        }
    }
}

/// Handle the parse command
fn handle_parse_command(
    source: &str,
    config: &OpnoteConfig,
    registry: &FormatRegistry,
    show_diagnostics: bool,
    check: bool,
) {
    let options = ParseOptions::from(&config.parser);
    let outcome = parse_with_diagnostics(source, &options);

    let output = registry
        .render(&outcome.document, &config.output)
        .unwrap_or_else(|e| {
            eprintln!("Output error: {}", e);
            std::process::exit(1);
        });

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }

    if show_diagnostics {
        for diagnostic in &outcome.diagnostics {
            eprintln!("warning: {}", diagnostic);
        }
    }

    if check {
        let issues = validate_source(source, &options);
        for issue in &issues {
            eprintln!("error: {}", issue);
        }
        if !issues.is_empty() {
            std::process::exit(2);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");
    for formatter in registry.formatters() {
        println!("  {}", formatter.name());
        println!("    {}", formatter.description());
    }
}
