//! waygraph — run Dijkstra, A* and longest-path searches on a scenario file.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use waygraph_core::Scenario;
use waygraph_lib::{Report, RunConfig, prompt_scenario};

#[derive(Parser)]
#[command(version, about = "Shortest and longest paths through a weighted graph")]
struct Args {
    /// Scenario file; asked for interactively when omitted.
    file: Option<PathBuf>,
    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
    /// Stop every search after this many expansions.
    #[arg(long, value_name = "N")]
    max_expanded: Option<usize>,
    /// Skip the exhaustive longest-path search.
    #[arg(long)]
    no_longest: bool,
    /// Log more (repeat for more detail). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = RunConfig {
        max_expanded: args.max_expanded,
        longest_path: !args.no_longest,
    };

    let scenario = match &args.file {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => {
            let stdin = io::stdin();
            let found = prompt_scenario(&mut stdin.lock(), &mut io::stdout(), |name: &str| {
                Scenario::load(name)
            })
            .context("reading scenario")?;
            match found {
                Some(scenario) => scenario,
                None => return Ok(()),
            }
        }
    };

    let report = Report::build(&scenario, &config);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
