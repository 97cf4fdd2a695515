//! Copy, cut and paste through the keyboard

mod common;

use common::*;
use tabula::cell::Selection;
use tabula::clipboard::{ClipboardProvider, MemoryClipboard};
use tabula::keymap::KeyCode;
use tabula::model::GridOptions;
use tabula::store::DataStore;

#[test]
fn test_copy_range_as_tsv_and_html() {
    let mut grid = people_grid();
    grid.set_selection(Some(range((0, 0), (1, 1))));
    assert_eq!(press(&mut grid, cmd_char('c')), None);

    assert_eq!(grid.clipboard().text(), Some("Elon\tMusk\nJeff\tBezos"));
    let html = &grid.clipboard().contents.as_ref().unwrap().html;
    assert_eq!(
        html,
        "<table><tr><td>Elon</td><td>Musk</td></tr><tr><td>Jeff</td><td>Bezos</td></tr></table>"
    );
}

#[test]
fn test_copy_then_paste_onto_itself_is_idempotent() {
    let mut grid = people_grid();
    let before = grid.store().clone();
    grid.set_selection(Some(range((0, 0), (2, 1))));
    press(&mut grid, cmd_char('c'));
    press(&mut grid, cmd_char('v'));

    assert_eq!(grid.store(), &before);
    assert_eq!(grid.selection(), Some(range((0, 0), (2, 1))));
}

#[test]
fn test_paste_block_at_active_cell_selects_it() {
    let mut grid = people_grid();
    grid.set_selection(Some(range((0, 0), (0, 1))));
    press(&mut grid, cmd_char('c'));

    grid.set_active_cell(Some(at(2, 0)));
    press(&mut grid, cmd_char('v'));
    assert_eq!(text_at(&grid, 2, 0), "Elon");
    assert_eq!(text_at(&grid, 2, 1), "Musk");
    assert_eq!(grid.selection(), Some(range((2, 0), (2, 1))));
    assert_eq!(grid.active_cell(), Some(at(2, 0)));
}

#[test]
fn test_paste_grows_rows() {
    let mut grid = people_grid();
    grid.clipboard_mut().set_text("a\tb\nc\td\n");
    grid.set_active_cell(Some(at(2, 0)));
    press(&mut grid, cmd_char('v'));

    assert_eq!(grid.store().row_count(), 4);
    assert_eq!(text_at(&grid, 2, 0), "a");
    assert_eq!(text_at(&grid, 3, 1), "d");
    assert_eq!(grid.selection(), Some(range((2, 0), (3, 1))));
}

#[test]
fn test_lock_rows_truncates_paste() {
    let options = GridOptions {
        auto_add_row: false,
        lock_rows: true,
    };
    let mut grid = people_grid_with(options, false);
    grid.clipboard_mut().set_text("a\nc");
    grid.set_active_cell(Some(at(2, 1)));
    press(&mut grid, cmd_char('v'));

    assert_eq!(grid.store().row_count(), 3);
    assert_eq!(text_at(&grid, 2, 1), "a");
}

#[test]
fn test_paste_drops_columns_past_right_edge() {
    let mut grid = people_grid();
    grid.clipboard_mut().set_text("x\ty\tz");
    grid.set_active_cell(Some(at(0, 1)));
    press(&mut grid, cmd_char('v'));

    assert_eq!(text_at(&grid, 0, 0), "Elon");
    assert_eq!(text_at(&grid, 0, 1), "x");
    assert_eq!(grid.selection(), Some(Selection::single(at(0, 1))));
}

#[test]
fn test_single_value_fills_selection() {
    let mut grid = people_grid();
    grid.clipboard_mut().set_text("X");
    grid.set_selection(Some(range((1, 0), (2, 1))));
    press(&mut grid, cmd_char('v'));

    for (row, col) in [(1, 0), (1, 1), (2, 0), (2, 1)] {
        assert_eq!(text_at(&grid, row, col), "X");
    }
    assert_eq!(text_at(&grid, 0, 0), "Elon");
    assert_eq!(grid.selection(), Some(range((1, 0), (2, 1))));
}

#[test]
fn test_empty_clipboard_is_a_noop() {
    let mut grid = people_grid();
    grid.set_active_cell(Some(at(0, 0)));
    assert_eq!(press(&mut grid, cmd_char('v')), None);

    grid.clipboard_mut().set_text("");
    assert_eq!(press(&mut grid, cmd_char('v')), None);
    assert_eq!(text_at(&grid, 0, 0), "Elon");
}

#[test]
fn test_cut_copies_then_clears() {
    let mut grid = people_grid();
    grid.set_selection(Some(range((1, 0), (1, 1))));
    press(&mut grid, cmd_char('x'));

    assert_eq!(grid.clipboard().text(), Some("Jeff\tBezos"));
    assert_eq!(text_at(&grid, 1, 0), "");
    assert_eq!(text_at(&grid, 1, 1), "");
}

#[test]
fn test_clipboard_keys_act_on_draft_while_editing() {
    let mut grid = people_grid();
    grid.set_active_cell(Some(at(0, 0)));
    press(&mut grid, key(KeyCode::Enter));
    press(&mut grid, cmd_char('c'));
    assert_eq!(grid.clipboard().text(), Some("Elon"));

    grid.clipboard_mut().set_text("Kim\nbal");
    press(&mut grid, cmd_char('v'));
    assert_eq!(grid.editor_text(), Some("Kim bal"));
    assert!(grid.is_editing());
    assert_eq!(text_at(&grid, 1, 0), "Jeff");
}

#[test]
fn test_preloaded_clipboard_pastes() {
    let columns: Vec<Box<dyn tabula::column::Column>> =
        vec![Box::new(tabula::column::TextColumn::new("firstName"))];
    let store = tabula::store::VecStore::for_columns(&columns, people_rows());
    let mut grid = tabula::grid::Grid::new(
        columns,
        store,
        tabula::viewport::WindowedViewport::new(10),
        MemoryClipboard::with_text("Kimbal"),
    );
    grid.set_active_cell(Some(at(0, 0)));
    grid.handle_key(cmd_char('v'), None);
    assert_eq!(grid.store().get_cell(0, 0).to_string(), "Kimbal");
}
