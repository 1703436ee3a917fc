use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{anyhow, Context};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use log::info;
use minesweeper_view::document::{Document, EventKind, HeadlessDocument};
use minesweeper_view::{init_logging, Board, BoardRenderer, RecordingController, RenderConfig};
use serde_json::json;

/// Render board text into a headless document and simulate cell activations.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File holding the board text; read from stdin when omitted.
    input: Option<PathBuf>,
    /// JSON file with render configuration (mount id, tags, classes).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Left-click the cell at X,Y. Clicks and flags replay in command-line order.
    #[arg(long = "click", value_name = "X,Y", value_parser = parse_coord)]
    clicks: Vec<(usize, usize)>,
    /// Right-click the cell at X,Y.
    #[arg(long = "flag", value_name = "X,Y", value_parser = parse_coord)]
    flags: Vec<(usize, usize)>,
    /// Print a JSON snapshot instead of the text outline.
    #[arg(long)]
    json: bool,
}

fn parse_coord(value: &str) -> Result<(usize, usize), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {:?}", value))?;
    let x = x.trim().parse().map_err(|e| format!("bad x {:?}: {}", x, e))?;
    let y = y.trim().parse().map_err(|e| format!("bad y {:?}: {}", y, e))?;
    Ok((x, y))
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<RenderConfig> {
    match path {
        Some(path) => {
            let raw =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        None => Ok(RenderConfig::default()),
    }
}

/// Merge `--click` and `--flag` values back into the order they were given.
fn activations(matches: &ArgMatches, cli: &Cli) -> Vec<((usize, usize), EventKind)> {
    let clicks = matches
        .indices_of("clicks")
        .into_iter()
        .flatten()
        .zip(cli.clicks.iter().map(|&coord| (coord, EventKind::Click)));
    let flags = matches
        .indices_of("flags")
        .into_iter()
        .flatten()
        .zip(cli.flags.iter().map(|&coord| (coord, EventKind::ContextMenu)));
    let mut ordered: Vec<_> = clicks.chain(flags).collect();
    ordered.sort_by_key(|(index, _)| *index);
    ordered.into_iter().map(|(_, activation)| activation).collect()
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let text = read_input(cli.input.as_ref())?;
    let config = load_config(cli.config.as_ref())?;
    let board = Board::parse(&text);
    info!(
        "board has {} rows, {} cells (rectangular: {})",
        board.row_count(),
        board.cell_count(),
        board.is_rectangular()
    );

    let document = HeadlessDocument::with_mount(&config.mount_id);
    let controller = Rc::new(RecordingController::new());
    let renderer = BoardRenderer::with_config(document.clone(), controller.clone(), config);
    renderer.render_board(&board)?;

    let mount = document
        .get_element_by_id(&renderer.config().mount_id)
        .ok_or_else(|| anyhow!("mount point disappeared after rendering"))?;
    for ((x, y), kind) in activations(&matches, &cli) {
        let cell = mount
            .child(y)
            .and_then(|row| row.child(x))
            .ok_or_else(|| anyhow!("no cell at ({}, {})", x, y))?;
        let outcome = cell.dispatch(kind);
        info!(
            "{} on ({}, {}) ran {} handler(s), default prevented: {}",
            kind.name(),
            x,
            y,
            outcome.listeners,
            outcome.default_prevented
        );
    }

    let calls = controller.take();
    if cli.json {
        let result = json!({
            "board": board,
            "rows": board.row_count(),
            "cells": board.cell_count(),
            "tree": mount.snapshot(),
            "calls": calls,
        });
        println!("{}", serde_json::to_string(&result)?);
    } else {
        print!("{}", mount.outline());
        for call in calls {
            println!("{:?}", call);
        }
    }
    Ok(())
}
