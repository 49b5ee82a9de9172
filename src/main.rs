// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
//! Asciicast Policy CLI
//!
//! A command-line interface for asking the asciicast policy for decisions.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asciicast_policy::policy::PolicyEngine;
use asciicast_policy::request::{AuthorizationRequest, DecisionReport};

mod config;

use config::{Config, LogFormat};

const HELP: &str = r#"
Asciicast Policy CLI

USAGE:
    asciicast-policy [OPTIONS] <COMMAND>

COMMANDS:
    decide        Decide an authorization request (all actions unless one is named);
                  exits non-zero if any evaluated action is denied
    attributes    Print the attributes the actor may set
    check         Check if policy file is valid
    show          Print the effective policy as YAML
    repl          Start interactive REPL mode

OPTIONS:
    -p, --policies <FILE>    Path to policies YAML file (default: $POLICY_FILE or built-in)
    -h, --help               Print help information
    -V, --version            Print version information

ENVIRONMENT:
    POLICY_FILE    Policy file used when --policies is not given
    LOG_LEVEL      Log level (default: warn), RUST_LOG takes precedence
    LOG_FORMAT     "pretty" (default) or "json"

EXAMPLES:
    # Can actor 7 make its own asciicast public?
    asciicast-policy decide '{"actor": {"id": 7}, "asciicast": {"owner_id": 7}, "action": "make_public"}'

    # Which attributes may an admin set?
    asciicast-policy attributes '{"actor": {"id": 1, "admin": true}, "asciicast": {}}'

    # Check policy file syntax
    asciicast-policy check -p policy.yaml
"#;

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid environment configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("{}", HELP);
        return ExitCode::FAILURE;
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            println!("{}", HELP);
            ExitCode::SUCCESS
        }
        "-V" | "--version" | "version" => {
            println!("asciicast-policy {}", asciicast_policy::VERSION);
            ExitCode::SUCCESS
        }
        "decide" => run_decide(&config, &args[2..]),
        "attributes" => run_attributes(&config, &args[2..]),
        "check" => run_check(&config, &args[2..]),
        "show" => run_show(&config, &args[2..]),
        "repl" => run_repl(&config, &args[2..]),
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("{}", HELP);
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing based on configuration. Logs go to stderr so that
/// decisions on stdout stay machine-readable.
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
            .init(),
    }
}

fn parse_policies_arg(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if (args[i] == "-p" || args[i] == "--policies") && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn load_policy_file(path: &Path) -> Result<PolicyEngine> {
    let yaml = fs::read_to_string(path)
        .with_context(|| format!("Failed to read policies file {}", path.display()))?;

    PolicyEngine::from_yaml(&yaml)
        .with_context(|| format!("Failed to parse policies file {}", path.display()))
}

/// Load the engine from `--policies`, then `POLICY_FILE`, then the built-in policy
fn load_engine(config: &Config, args: &[String]) -> Result<PolicyEngine> {
    match parse_policies_arg(args).or_else(|| config.policy_file.clone()) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading policy file");
            load_policy_file(&path)
        }
        None => {
            tracing::debug!("using built-in policy");
            Ok(PolicyEngine::new())
        }
    }
}

fn parse_request(args: &[String]) -> Result<AuthorizationRequest> {
    // Find the JSON argument (first argument that looks like an object)
    let json = args
        .iter()
        .find(|a| a.trim_start().starts_with('{'))
        .context("authorization request JSON required")?;

    serde_json::from_str(json).context("Failed to parse authorization request JSON")
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
    println!("{}", rendered);
    Ok(())
}

fn report_exit_code(report: &DecisionReport) -> ExitCode {
    if report.all_allowed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_decide(config: &Config, args: &[String]) -> ExitCode {
    let result = load_engine(config, args).and_then(|engine| {
        let request = parse_request(args)?;
        let report = engine.evaluate(&request);
        print_json(&report)?;
        Ok(report)
    });

    match result {
        Ok(report) => report_exit_code(&report),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_attributes(config: &Config, args: &[String]) -> ExitCode {
    let result = load_engine(config, args).and_then(|engine| {
        let request = parse_request(args)?;
        let permitted =
            engine.permitted_attributes(request.actor.as_ref(), &request.asciicast);
        print_json(&permitted)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_check(config: &Config, args: &[String]) -> ExitCode {
    let policies_path = match parse_policies_arg(args).or_else(|| config.policy_file.clone()) {
        Some(p) => p,
        None => {
            eprintln!("Error: --policies argument or POLICY_FILE required");
            return ExitCode::FAILURE;
        }
    };

    match load_policy_file(&policies_path) {
        Ok(engine) => {
            println!(
                "OK: Policy file is valid ({} actions bound)",
                engine.config().rules.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_show(config: &Config, args: &[String]) -> ExitCode {
    let result = load_engine(config, args).and_then(|engine| {
        engine
            .config()
            .to_yaml()
            .context("Failed to render policy as YAML")
    });

    match result {
        Ok(yaml) => {
            print!("{}", yaml);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_repl(config: &Config, args: &[String]) -> ExitCode {
    let engine = match load_engine(config, args) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Asciicast Policy REPL");
    println!("Enter authorization requests as JSON, or 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line == "quit" || line == "exit" {
            break;
        }

        let request: AuthorizationRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Parse error: {}", e);
                continue;
            }
        };

        let report = engine.evaluate(&request);
        for verdict in &report.verdicts {
            match verdict.reason {
                None => println!("{}: ALLOWED", verdict.action),
                Some(reason) => println!("{}: DENIED ({})", verdict.action, reason),
            }
        }
        println!("attributes: {:?}", report.permitted_attributes.names());
    }

    ExitCode::SUCCESS
}
