use anyhow::{Context, Result};
use std::io::Write;

use skyscrapers_checker::board::read_board_with;
use skyscrapers_checker::config::Config;
use skyscrapers_checker::explain_board;
use skyscrapers_checker::output::render_verdict;

fn main() -> Result<()> {
    // Parse configuration from command line and config file
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    if let Some(path) = &config.config_file {
        log::info!("Using config file {}", path.display());
    }

    let board = read_board_with(&config.board, config.placeholder)
        .with_context(|| format!("Cannot validate {}", config.board.display()))?;

    let verdict = explain_board(&board);
    let rendered = render_verdict(&verdict, config.format, config.explain)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
