//! Navigation over a windowed (virtualized) row range

mod common;

use common::*;
use tabula::keymap::KeyCode;
use tabula::store::{DataStore, VecStore};
use tabula::viewport::Viewport;

#[test]
fn test_arrow_past_window_scrolls_minimally() {
    let mut grid = tall_grid(50, 10);
    grid.set_active_cell(Some(at(9, 0)));
    assert_eq!(grid.viewport().top_row, 0);

    press(&mut grid, key(KeyCode::Down));
    assert_eq!(grid.active_cell(), Some(at(10, 0)));
    assert_eq!(grid.viewport().visible_row_range(), 1..11);

    press(&mut grid, key(KeyCode::Up));
    assert_eq!(grid.viewport().top_row, 1);
}

#[test]
fn test_page_keys_move_by_visible_rows() {
    let mut grid = tall_grid(50, 10);
    grid.set_active_cell(Some(at(0, 1)));
    press(&mut grid, key(KeyCode::PageDown));
    assert_eq!(grid.active_cell(), Some(at(10, 1)));
    press(&mut grid, key(KeyCode::PageDown));
    press(&mut grid, key(KeyCode::PageUp));
    assert_eq!(grid.active_cell(), Some(at(10, 1)));
    assert!(grid.viewport().is_row_visible(10));
}

#[test]
fn test_jump_to_bottom_brings_last_row_into_view() {
    let mut grid = tall_grid(50, 10);
    grid.set_active_cell(Some(at(0, 0)));
    press(&mut grid, cmd(KeyCode::Down));
    assert_eq!(grid.active_cell(), Some(at(49, 0)));
    assert_eq!(grid.viewport().top_row, 40);
}

#[test]
fn test_navigation_reaches_rows_never_rendered() {
    let mut grid = tall_grid(1_000, 10);
    grid.set_selection(Some(range((500, 0), (500, 0))));
    grid.handle_key(shift(KeyCode::Down), None);
    assert_eq!(grid.selection(), Some(range((500, 0), (501, 0))));
    assert!(grid.viewport().is_row_visible(500));
}

#[test]
fn test_scrolling_the_edit_row_away_commits() {
    let mut grid = tall_grid(50, 10);
    grid.set_active_cell(Some(at(2, 0)));
    grid.type_text("Kimbal");
    assert!(grid.is_editing());

    // Still visible: nothing happens
    assert_eq!(grid.visible_range_changed(0..10), None);
    assert!(grid.is_editing());

    assert!(grid.visible_range_changed(20..30).is_some());
    assert!(!grid.is_editing());
    assert_eq!(text_at(&grid, 2, 0), "Kimbal");
    assert_eq!(grid.active_cell(), Some(at(2, 0)));
}

#[test]
fn test_rows_removed_by_host_reclamps() {
    let mut grid = tall_grid(50, 10);
    grid.set_active_cell(Some(at(40, 1)));
    grid.type_text("gone");

    let keys = grid.store().keys().to_vec();
    let rows = grid.store().rows()[..5].to_vec();
    *grid.store_mut() = VecStore::new(keys, rows);
    grid.rows_changed();

    assert!(!grid.is_editing());
    assert_eq!(grid.store().row_count(), 5);
    assert_eq!(grid.active_cell(), Some(at(4, 1)));
}
