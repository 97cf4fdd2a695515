//! Escape layers: cancel edit, collapse range, clear

mod common;

use common::*;
use tabula::cell::Selection;
use tabula::keymap::KeyCode;

#[test]
fn test_escape_cancels_lazy_edit() {
    let mut grid = lazy_people_grid();
    grid.set_active_cell(Some(at(0, 0)));
    grid.type_text("Kimbal");
    assert_eq!(grid.editor_text(), Some("Kimbal"));

    press(&mut grid, key(KeyCode::Escape));
    assert!(!grid.is_editing());
    assert_eq!(text_at(&grid, 0, 0), "Elon");
    assert_eq!(grid.active_cell(), Some(at(0, 0)));
}

#[test]
fn test_escape_restores_eager_edit() {
    let mut grid = people_grid();
    grid.set_active_cell(Some(at(1, 1)));
    grid.type_text("Lee");
    assert_eq!(text_at(&grid, 1, 1), "Lee");

    press(&mut grid, key(KeyCode::Escape));
    assert!(!grid.is_editing());
    assert_eq!(text_at(&grid, 1, 1), "Bezos");
}

#[test]
fn test_escape_collapses_range_then_clears() {
    let mut grid = people_grid();
    grid.set_active_cell(Some(at(1, 0)));
    press(&mut grid, shift(KeyCode::Down));
    assert_eq!(grid.selection(), Some(range((1, 0), (2, 0))));

    press(&mut grid, key(KeyCode::Escape));
    assert_eq!(grid.selection(), Some(Selection::single(at(1, 0))));
    assert_eq!(grid.active_cell(), Some(at(1, 0)));

    press(&mut grid, key(KeyCode::Escape));
    assert_eq!(grid.active_cell(), None);
    assert_eq!(grid.selection(), None);

    // Nothing left to clear
    assert_eq!(press(&mut grid, key(KeyCode::Escape)), None);
}

#[test]
fn test_escape_while_editing_keeps_the_range_layer() {
    let mut grid = lazy_people_grid();
    grid.set_active_cell(Some(at(0, 1)));
    press(&mut grid, key(KeyCode::Enter));
    assert!(grid.is_editing());

    press(&mut grid, key(KeyCode::Escape));
    assert!(!grid.is_editing());
    assert_eq!(grid.active_cell(), Some(at(0, 1)));
    assert_eq!(text_at(&grid, 0, 1), "Musk");
}
