#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod config;
mod input;
mod tui;

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Command, arg};
use console::Term;
use duel_chess::{PieceStyle, initial_state, reduce};

use config::{ConsoleConfig, read_config_file};
use input::{Command as UserCommand, HELP, parse_command};


fn main() -> anyhow::Result<()> {
    let matches = Command::new("Duel chess")
        .version(clap::crate_version!())
        .about("Two players, one terminal: a chess board that only accepts legal moves")
        .arg(arg!(--config <file> "Path to the configuration file: yaml-serialized ConsoleConfig."))
        .arg(arg!(--ascii "Use ASCII letters instead of piece pictograms"))
        .arg(arg!(--"no-color" "Do not use terminal colors"))
        .arg(arg!(--"log-level" <level> "Log filter, e.g. \"info\" or \"debug\""))
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => read_config_file(&PathBuf::from(path))?,
        None => ConsoleConfig::default(),
    };
    if matches.get_flag("ascii") {
        config.pictograms = PieceStyle::Ascii;
    }
    if matches.get_flag("no-color") {
        config.colored = false;
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.log_level = level.clone();
    }

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .parse_default_env()
        .init();
    log::debug!("Using {config:?}");

    run(&config)
}

fn run(config: &ConsoleConfig) -> anyhow::Result<()> {
    let term = Term::stdout();
    let mut state = initial_state();
    term.write_line(&tui::render_game(&state, config))?;
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin.")?;
        match parse_command(&state, &line) {
            Ok(UserCommand::Event(event)) => {
                state = reduce(state, event);
                term.write_line(&tui::render_game(&state, config))?;
            }
            Ok(UserCommand::Help) => term.write_line(HELP)?,
            Ok(UserCommand::Quit) => break,
            Err(err) => term.write_line(&format!("{err}"))?,
        }
    }
    Ok(())
}
