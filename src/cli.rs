use crate::config::{Config, QueryStore};
use crate::error::{Result, StatsError};
use crate::fetcher::{PageFetcher, NPM_WEBSITE};
use crate::{pipeline, report};
use clap::{ArgAction, Parser};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Duration;

/// The manual shown for `-?` and whenever there is nothing to query
pub const MANUAL: &str = include_str!("manual.txt");

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "npm-stats", author, version, about, disable_help_flag = true)]
pub struct Cli {
    /// Show the manual and the stored query
    #[arg(short = '?', long = "help", short_alias = 'h', action = ArgAction::SetTrue)]
    pub help: bool,

    /// npm user(s) whose packages should be included; comma-separated, repeatable
    #[arg(long = "user", value_name = "NAME[,NAME...]")]
    pub users: Vec<String>,

    /// Package names to report on
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Remember this query for later runs
    #[arg(long)]
    pub store: bool,

    /// Forget the stored query and exit
    #[arg(long)]
    pub unstore: bool,

    /// File holding the stored query (defaults to one next to the executable)
    #[arg(long, env = "NPM_STATS_QUERY_FILE", value_name = "PATH")]
    pub query_file: Option<PathBuf>,

    /// Website the user and package pages are scraped from
    #[arg(long, env = "NPM_STATS_REGISTRY_URL", default_value = NPM_WEBSITE, hide = true)]
    pub registry_url: String,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, env = "NPM_STATS_LOG", default_value = "warn")]
    pub log_level: String,
}

/// What an invocation asks for, before any file or network access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the manual and the stored query
    Help,
    /// Delete the stored query
    Unstore,
    /// Repeat the stored query
    LoadStored,
    /// Query the users and packages given on the command line
    FromArgs {
        /// The query built from the arguments
        config: Config,
        /// Whether to persist the query before running it
        store: bool,
    },
}

impl Invocation {
    /// Classifies the parsed arguments; help wins over unstore, which wins over everything else
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.help {
            Self::Help
        } else if cli.unstore {
            Self::Unstore
        } else {
            let config = Config::from_args(&cli.users, cli.packages.iter().cloned());
            if config.is_empty() {
                Self::LoadStored
            } else {
                Self::FromArgs {
                    config,
                    store: cli.store,
                }
            }
        }
    }
}

/// Works out the query to run, or `None` when the invocation ends without one
///
/// Handles the help and unstore paths and persists the query when asked to.
/// A missing or broken stored query, or an empty query, shows the manual.
pub async fn resolve_query(invocation: Invocation, store: &QueryStore) -> Result<Option<Config>> {
    let outcome = match invocation {
        Invocation::Help => {
            show_manual(store);
            return Ok(None);
        }
        Invocation::Unstore => {
            unstore(store)?;
            return Ok(None);
        }
        Invocation::LoadStored => store.load().map(|config| {
            println!("{}", "Loaded stored config".bright_green());
            config
        }),
        Invocation::FromArgs { config, store: persist } => {
            if config.is_empty() {
                Err(StatsError::InvalidInvocation("no users or packages given".into()))
            } else {
                if persist {
                    store.save(&config).await?;
                    println!("{}", "Stored query.".bright_green());
                }
                Ok(config)
            }
        }
    };

    match outcome {
        Ok(config) => Ok(Some(config)),
        Err(e) if e.shows_manual() => {
            debug!("Showing manual: {}", e);
            show_manual(store);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Runs one invocation of the tool from parsed arguments
pub async fn execute(cli: Cli) -> Result<()> {
    let store = match &cli.query_file {
        Some(path) => QueryStore::new(path),
        None => QueryStore::beside_executable()?,
    };
    debug!("Using stored query file {}", store.path().display());

    let Some(config) = resolve_query(Invocation::from_cli(&cli), &store).await? else {
        return Ok(());
    };

    let fetcher = PageFetcher::with_base_url(&cli.registry_url)?;
    info!(
        "Querying {} for {} users and {} packages",
        fetcher.base_url(),
        config.users.len(),
        config.packages.len()
    );

    let spinner = progress_spinner("Fetching download statistics...");
    let stats = pipeline::run(&fetcher, config).await;
    spinner.finish_and_clear();

    println!("{}", report::render(&stats));
    Ok(())
}

/// Prints the manual followed by the stored query, if any
pub fn show_manual(store: &QueryStore) {
    println!("{}", MANUAL);
    println!();

    match store.read_raw() {
        Some(raw) => {
            println!("{}", "Stored config:".bright_yellow());
            println!("{}", raw);
        }
        None => println!("No stored config found."),
    }
}

fn unstore(store: &QueryStore) -> Result<()> {
    if store.clear()? {
        println!("{}", "Removed stored config.".bright_green());
    } else {
        println!("No stored config found.");
    }
    Ok(())
}

/// Spinner on stderr; indicatif hides it when stderr is not a terminal
fn progress_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["-", "\\", "|", "/", "-", "\\", "|", "/"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
