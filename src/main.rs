mod activity;
mod app;
mod cards;
mod cli;
mod color;
mod config;
mod db;
mod event;
mod feeds;
mod logging;
mod photos;
mod playlist;
mod tui;
mod types;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    logging::init(None)?;
    let config = config::Config::load()?;
    let mut conn = db::init(&config.db_path)?;
    let cli_opts = cli::Cli::parse();
    if let Some(command) = cli_opts.command {
        return cli::run(command, &config, &mut conn);
    }

    let mut app = app::App::new(config, conn);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
