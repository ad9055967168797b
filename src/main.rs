mod app;
mod board;
mod config;
mod edit;
mod input;
mod logging;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;

use config::{Config, SeedList};

#[derive(Parser, Debug)]
#[command(name = "listboard", about = "A keyboard-first list and card board")]
struct Cli {
    /// TOML file with board settings and seed lists
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board title (overrides the config file)
    #[arg(short, long)]
    title: Option<String>,

    /// Start with an empty list of this title (repeatable)
    #[arg(short, long = "list", value_name = "TITLE")]
    lists: Vec<String>,

    /// Delete lists and cards without asking
    #[arg(long)]
    no_confirm: bool,

    /// Append log events to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level or filter directive, e.g. `debug` or `listboard=trace`
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    log_level: String,
}

/// Load the config file, if any, and apply command-line overrides on top.
fn resolve_config(cli: &Cli) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path).wrap_err("failed to load config")?,
        None => Config::default(),
    };

    if let Some(title) = &cli.title {
        config.board.title = title.clone();
    }
    if cli.no_confirm {
        config.board.confirm_delete = false;
    }
    config.lists.extend(cli.lists.iter().map(|title| SeedList {
        title: title.clone(),
        cards: Vec::new(),
    }));

    config.validate().wrap_err("invalid board settings")?;
    Ok(config)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path, &cli.log_level).wrap_err("failed to set up logging")?;
    }

    let mut store = config.build_store();
    let mut state = app::AppState::new(config.board.confirm_delete);

    let mut terminal = ratatui::init();
    let result = app::run(&mut terminal, &mut store, &mut state);
    ratatui::restore();
    result
}
