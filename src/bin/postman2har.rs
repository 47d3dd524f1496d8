//! postman2har command line entry point
//!
//! Reads a Postman collection, converts it and writes the HAR requests as a
//! JSON array to stdout or a file.
//!
//! # Usage
//!
//! ```bash
//! postman2har collection.json --env staging.postman_environment.json --pretty
//! postman2har collection.json --var token=abc --base-url http://localhost:8080 -o out.json
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use clap::Parser;
use postman2har::environment::load_environment_file;
use postman2har::{convert_str, ConvertOptions};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Converts a Postman collection into HAR request records.
#[derive(Parser, Debug)]
#[command(name = "postman2har")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Collection file (Postman v2.0 or v2.1)
    #[arg(value_name = "COLLECTION")]
    collection: PathBuf,

    /// Environment file: a Postman environment export or a flat JSON object
    #[arg(long)]
    env: Option<PathBuf>,

    /// Environment variable override, may be repeated
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_key_value, action = clap::ArgAction::Append)]
    vars: Vec<(String, String)>,

    /// Replaces protocol, host and port of structured request URLs
    #[arg(long)]
    base_url: Option<String>,

    /// Seed for synthesized values of unresolved variables
    #[arg(long)]
    seed: Option<u64>,

    /// Output file, stdout when omitted
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ConvertOptions::default();
    if let Some(env) = &cli.env {
        options = options.with_environments(load_environment_file(env)?);
    }
    options = options.with_environments(cli.vars);
    if let Some(base_url) = cli.base_url {
        options = options.with_base_url(base_url);
    }
    if let Some(seed) = cli.seed {
        options = options.with_seed(seed);
    }

    let json = fs::read_to_string(&cli.collection)?;
    let requests = convert_str(&json, &options)?;
    log::info!(
        "converted {} requests from {}",
        requests.len(),
        cli.collection.display()
    );

    let output = if cli.pretty {
        serde_json::to_string_pretty(&requests)?
    } else {
        serde_json::to_string(&requests)?
    };

    match &cli.output {
        Some(path) => fs::write(path, output)?,
        None => println!("{}", output),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("postman2har: {}", err);
            ExitCode::FAILURE
        }
    }
}
