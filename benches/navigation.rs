//! Benchmarks for the interaction hot paths
//!
//! - key dispatch + update for arrow navigation on a large grid
//! - range extension
//! - clipboard serialize / parse / paste planning
//!
//! Run with: cargo bench navigation

use tabula::cell::{CellCoordinate, Selection};
use tabula::clipboard::{apply_paste, parse, serialize};
use tabula::column::{CellValue, Column, TextColumn};
use tabula::grid::Grid;
use tabula::keymap::{KeyCode, Keystroke};
use tabula::store::{Record, VecStore};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const COLS: usize = 8;

fn columns() -> Vec<Box<dyn Column>> {
    (0..COLS)
        .map(|c| Box::new(TextColumn::new(format!("c{}", c))) as Box<dyn Column>)
        .collect()
}

fn make_store(rows: usize) -> VecStore {
    let columns = columns();
    let records = (0..rows)
        .map(|r| {
            let mut record = Record::new();
            for c in 0..COLS {
                record.insert(format!("c{}", c), CellValue::text(format!("r{}c{}", r, c)));
            }
            record
        })
        .collect();
    VecStore::for_columns(&columns, records)
}

fn make_grid(rows: usize) -> Grid<VecStore> {
    let mut grid = Grid::headless(columns(), make_store(rows));
    grid.set_active_cell(Some(CellCoordinate::new(0, 0)));
    grid
}

// ============================================================================
// Navigation
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn arrow_down(iterations: usize) {
    let mut grid = make_grid(10_000);
    let down = Keystroke::key(KeyCode::Down);

    for _ in 0..iterations {
        divan::black_box(grid.handle_key(down, None));
    }

    divan::black_box(grid.active_cell());
}

#[divan::bench(args = [100, 1000])]
fn tab_through_rows(iterations: usize) {
    let mut grid = make_grid(10_000);
    let tab = Keystroke::key(KeyCode::Tab);

    for _ in 0..iterations {
        divan::black_box(grid.handle_key(tab, None));
    }

    divan::black_box(grid.active_cell());
}

#[divan::bench(args = [100, 1000])]
fn shift_arrow_extend(iterations: usize) {
    let mut grid = make_grid(10_000);
    let extend = Keystroke::shift(KeyCode::Down);

    for _ in 0..iterations {
        divan::black_box(grid.handle_key(extend, None));
    }

    divan::black_box(grid.selection());
}

#[divan::bench]
fn type_and_commit() {
    let mut grid = make_grid(100);
    grid.type_text("The quick brown fox");
    divan::black_box(grid.handle_key(Keystroke::key(KeyCode::Enter), None));
}

// ============================================================================
// Clipboard codec
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn copy_rows(bencher: divan::Bencher, rows: usize) {
    let store = make_store(rows);
    let columns = columns();
    let selection = Selection::new(
        CellCoordinate::new(0, 0),
        CellCoordinate::new(rows - 1, COLS - 1),
    );

    bencher.bench_local(|| divan::black_box(serialize(selection, &store, &columns)));
}

#[divan::bench(args = [10, 100, 1000])]
fn parse_and_plan_paste(bencher: divan::Bencher, rows: usize) {
    let store = make_store(rows);
    let columns = columns();
    let all = Selection::new(
        CellCoordinate::new(0, 0),
        CellCoordinate::new(rows - 1, COLS - 1),
    );
    let text = serialize(all, &store, &columns);
    let target = Selection::single(CellCoordinate::new(0, 0));

    bencher.bench_local(|| {
        let parsed = parse(&text);
        divan::black_box(apply_paste(&parsed, target, &store, &columns, false))
    });
}
