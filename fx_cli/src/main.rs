//! Fixture generation from the command line.
//!
//! Reads a JSON stage request from a file or stdin, generates the stage's
//! fixtures and prints them as JSON on stdout. Logs go to stderr.

mod config;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use fixture_engine::{StageRequest, generate_stage};
use log::{info, warn};
use pico_args::Arguments;

use config::CliConfig;

const HELP: &str = "\
Generate knockout or round-robin fixtures for a competition stage

USAGE:
  fx_cli [OPTIONS] [REQUEST_FILE]

ARGS:
  REQUEST_FILE             JSON stage request  [default: read from stdin]

OPTIONS:
  --duration   MIN         Match duration when the request omits one  [default: env FIXTURE_MATCH_DURATION_MINUTES or 90]
  --break      MIN         Break between waves when the request omits one  [default: env FIXTURE_BREAK_MINUTES or 15]

FLAGS:
  --pretty                 Pretty-print the JSON output
  -h, --help               Print help information

ENVIRONMENT:
  RUST_LOG                 Log filter (e.g., debug)
  (A .env file in the working directory is loaded if present)
";

struct Args {
    input: Option<PathBuf>,
    duration: Option<i64>,
    break_minutes: Option<i64>,
    pretty: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        duration: pargs
            .opt_value_from_str("--duration")
            .context("Invalid --duration")?,
        break_minutes: pargs
            .opt_value_from_str("--break")
            .context("Invalid --break")?,
        pretty: pargs.contains("--pretty"),
        input: pargs.opt_free_from_str().context("Invalid request path")?,
    };

    env_logger::builder().format_target(false).init();

    let leftover = pargs.finish();
    if !leftover.is_empty() {
        warn!("Ignoring unused arguments: {:?}", leftover);
    }

    run(args)
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_env(args.duration, args.break_minutes);
    config.validate()?;

    let raw = read_request(args.input.as_deref())?;
    let request = StageRequest::from_json(&raw).context("Failed to parse stage request")?;
    info!("Generating fixtures for stage {}", request.stage_id);

    let stage = generate_stage(&request, &config.slot_defaults).map_err(|e| {
        anyhow!(
            "Failed to generate fixtures for stage {}: {}",
            request.stage_id,
            e.client_message()
        )
    })?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&stage)?
    } else {
        serde_json::to_string(&stage)?
    };
    println!("{output}");

    info!(
        "Wrote {} fixtures for stage {}",
        stage.fixtures.len(),
        stage.stage_id
    );
    Ok(())
}

fn read_request(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read request from stdin")?;
            Ok(input)
        }
    }
}
