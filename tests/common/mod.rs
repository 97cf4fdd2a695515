//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tabula::cell::{CellCoordinate, Selection};
use tabula::clipboard::MemoryClipboard;
use tabula::column::{CellValue, Column, TextColumn};
use tabula::commands::Cmd;
use tabula::grid::Grid;
use tabula::keymap::{KeyCode, Keystroke, Modifiers};
use tabula::model::GridOptions;
use tabula::store::{DataStore, Record, VecStore};
use tabula::viewport::WindowedViewport;

pub const PEOPLE: [(&str, &str); 3] = [
    ("Elon", "Musk"),
    ("Jeff", "Bezos"),
    ("Richard", "Branson"),
];

pub fn people_rows() -> Vec<Record> {
    PEOPLE
        .iter()
        .map(|(first, last)| {
            let mut record = Record::new();
            record.insert("firstName".into(), CellValue::text(*first));
            record.insert("lastName".into(), CellValue::text(*last));
            record
        })
        .collect()
}

fn people_columns(lazy: bool) -> Vec<Box<dyn Column>> {
    vec![
        Box::new(TextColumn::new("firstName").with_continuous_updates(!lazy)),
        Box::new(TextColumn::new("lastName").with_continuous_updates(!lazy)),
    ]
}

/// The Elon/Jeff/Richard grid with eager text columns
pub fn people_grid() -> Grid<VecStore> {
    people_grid_with(GridOptions::default(), false)
}

pub fn lazy_people_grid() -> Grid<VecStore> {
    people_grid_with(GridOptions::default(), true)
}

pub fn people_grid_with(options: GridOptions, lazy: bool) -> Grid<VecStore> {
    let columns = people_columns(lazy);
    let store = VecStore::for_columns(&columns, people_rows());
    Grid::headless(columns, store).with_options(options)
}

/// Grid with `rows` rows of generated names and a short window
pub fn tall_grid(rows: usize, visible_rows: usize) -> Grid<VecStore> {
    let columns = people_columns(false);
    let records = (0..rows)
        .map(|i| {
            let mut record = Record::new();
            record.insert("firstName".into(), CellValue::text(format!("first{}", i)));
            record.insert("lastName".into(), CellValue::text(format!("last{}", i)));
            record
        })
        .collect();
    let store = VecStore::for_columns(&columns, records);
    Grid::new(
        columns,
        store,
        WindowedViewport::new(visible_rows),
        MemoryClipboard::default(),
    )
}

pub fn at(row: usize, col: usize) -> CellCoordinate {
    CellCoordinate::new(row, col)
}

pub fn range(a: (usize, usize), b: (usize, usize)) -> Selection {
    Selection::new(at(a.0, a.1), at(b.0, b.1))
}

pub fn key(code: KeyCode) -> Keystroke {
    Keystroke::key(code)
}

pub fn shift(code: KeyCode) -> Keystroke {
    Keystroke::shift(code)
}

/// Ctrl on Linux/Windows, Cmd on macOS
pub fn cmd(code: KeyCode) -> Keystroke {
    Keystroke::new(code, Modifiers::CTRL)
}

pub fn cmd_char(c: char) -> Keystroke {
    Keystroke::char_with_mods(c, Modifiers::CTRL)
}

pub fn press(grid: &mut Grid<VecStore>, stroke: Keystroke) -> Option<Cmd> {
    grid.handle_key(stroke, None)
}

pub fn text_at(grid: &Grid<VecStore>, row: usize, col: usize) -> String {
    grid.store().get_cell(row, col).to_string()
}
