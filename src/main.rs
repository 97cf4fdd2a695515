//! Headless driver: load a TSV table, replay keys, print the result

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use tabula::cli::{CliArgs, KeyToken, RunConfig};
use tabula::clipboard::{ClipboardProvider, SystemClipboard};
use tabula::column::{Column, TextColumn};
use tabula::config::GridConfig;
use tabula::grid::{Grid, HEADLESS_ROWS};
use tabula::keymap::{load_default_keymap, Keymap};
use tabula::store::VecStore;
use tabula::tracing::SelectionSnapshot;
use tabula::tsv::{read_table, write_table};
use tabula::viewport::WindowedViewport;

fn main() -> Result<()> {
    tabula::tracing::init();

    let args = CliArgs::parse();
    let config = args
        .into_config(&GridConfig::load())
        .map_err(anyhow::Error::msg)
        .context("invalid arguments")?;

    run(config)
}

fn run(config: RunConfig) -> Result<()> {
    let content = fs::read_to_string(&config.file)
        .with_context(|| format!("failed to read {}", config.file.display()))?;
    let table = read_table(&content)
        .with_context(|| format!("failed to parse {}", config.file.display()))?;
    tracing::info!(
        rows = table.rows.len(),
        cols = table.keys.len(),
        "loaded {}",
        config.file.display()
    );

    let keys = table.keys.clone();
    let columns: Vec<Box<dyn Column>> = keys
        .iter()
        .map(|key| {
            Box::new(TextColumn::new(key).with_continuous_updates(config.continuous_updates))
                as Box<dyn Column>
        })
        .collect();
    let store = VecStore::new(keys.clone(), table.rows);

    if config.system_clipboard {
        let viewport = WindowedViewport::new(HEADLESS_ROWS);
        let grid = Grid::new(columns, store, viewport, SystemClipboard);
        replay(grid, &config, &keys)
    } else {
        replay(Grid::headless(columns, store), &config, &keys)
    }
}

fn replay<C: ClipboardProvider>(
    grid: Grid<VecStore, WindowedViewport, C>,
    config: &RunConfig,
    keys: &[String],
) -> Result<()> {
    let mut grid = grid
        .with_options(config.options)
        .with_keymap(Keymap::with_bindings(load_default_keymap()));
    if config.active.is_some() {
        grid.set_active_cell(config.active);
    }

    for token in &config.keys {
        let cmd = match token {
            KeyToken::Stroke(stroke) => grid.handle_key(*stroke, None),
            KeyToken::Text(text) => grid.type_text(text),
        };
        if let Some(direction) = cmd.as_ref().and_then(|c| c.focus_out()) {
            tracing::info!(?direction, "focus left the grid");
        }
    }

    let data = write_table(keys, grid.store()).context("failed to write table")?;

    if config.json {
        let clipboard = grid.clipboard_mut().get_text();
        let output = serde_json::json!({
            "state": grid.state(),
            "rows": grid.store().rows(),
            "clipboard": clipboard,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", data);
        eprintln!("{}", SelectionSnapshot::from_state(grid.state()));
    }

    Ok(())
}
