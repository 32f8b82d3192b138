//! Command-line interface for kswrap
//! This binary adds or removes word-wrap hint tags in KAG script files.
//!
//! Usage:
//!   kswrap wrap `<input>` `<output>` [--ie `<enc>`] [--oe `<enc>`]    - Insert wrap tags
//!   kswrap unwrap `<input>` `<output>` [--ie `<enc>`] [--oe `<enc>`]  - Remove wrap tags
//!   kswrap tokens `<input>` `<output>`                              - Dump the token view as JSON

use clap::{Arg, ArgAction, ArgMatches, Command};
use kswrap::config::{KsWrapConfig, Loader};
use kswrap::{Action, Job, WrapError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Per-directory configuration picked up when present
const LOCAL_CONFIG: &str = "kswrap.toml";

fn main() {
    let matches = Command::new("kswrap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Adds or removes word-wrap hint tags in KAG script files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("action")
                .help("Chooses between wrapping and unwrapping")
                .required(true)
                .value_parser(["wrap", "unwrap", "tokens"])
                .index(1),
        )
        .arg(
            Arg::new("input_file")
                .help("Path or name of the .ks file")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("output_file")
                .help("Path or name of the resulting .ks file")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::new("input-encoding")
                .long("input-encoding")
                .visible_alias("ie")
                .help("Input file encoding, SHIFT-JIS by default"),
        )
        .arg(
            Arg::new("output-encoding")
                .long("output-encoding")
                .visible_alias("oe")
                .help("Output file encoding, SHIFT-JIS by default"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let action = matches
        .get_one::<String>("action")
        .and_then(|name| name.parse::<Action>().ok())
        .expect("clap restricts action to known names");
    let job = Job {
        action,
        input: PathBuf::from(required(&matches, "input_file")),
        output: PathBuf::from(required(&matches, "output_file")),
        input_encoding: config.encoding.input.clone(),
        output_encoding: config.encoding.output.clone(),
    };

    handle_job(&job, &config);
}

/// Run the job and report the outcome
fn handle_job(job: &Job, config: &KsWrapConfig) {
    match job.run(config.wrap_options()) {
        Ok(summary) => {
            tracing::info!(lines = summary.lines, tags = summary.tags, "done");
            println!("{}", job.completion_message());
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Defaults, then `kswrap.toml` if present, then `--config`, then encoding flags
fn load_config(matches: &ArgMatches) -> Result<KsWrapConfig, WrapError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let loader = loader.with_encodings(
        matches.get_one::<String>("input-encoding").map(String::as_str),
        matches.get_one::<String>("output-encoding").map(String::as_str),
    )?;
    Ok(loader.build()?)
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .expect("clap enforces required arguments")
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
