//! Screen geometry shared by rendering and mouse hit-testing

use crate::arcade::balloon::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::keyboard::{self, Key};
use crate::toys::dots::GRID_SIZE;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

/// Blank columns between neighbouring keys
const KEY_GAP: u16 = 1;

/// Regions shared by every screen
#[derive(Debug, Clone, Copy)]
pub struct FrameLayout {
    pub header: Rect,
    pub body: Rect,
    pub messages: Rect,
    pub status: Rect,
}

#[must_use]
pub fn frame(area: Rect) -> FrameLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Screen body
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    FrameLayout {
        header: chunks[0],
        body: chunks[1],
        messages: chunks[2],
        status: chunks[3],
    }
}

/// Word game body: board on top, keyboard below
#[derive(Debug, Clone, Copy)]
pub struct WordleLayout {
    pub board: Rect,
    pub keyboard: Rect,
}

#[must_use]
pub fn wordle(body: Rect) -> WordleLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // 6 rows + current row label + borders
            Constraint::Length(7),  // 3 key rows with spacing + borders
            Constraint::Min(0),
        ])
        .split(body);

    WordleLayout {
        board: chunks[0],
        keyboard: chunks[1],
    }
}

/// Area inside a bordered block
#[must_use]
pub fn inner(area: Rect) -> Rect {
    area.inner(Margin {
        horizontal: 1,
        vertical: 1,
    })
}

fn key_width(key: Key) -> u16 {
    key.label().chars().count() as u16 + 2
}

/// Key caps laid out in `area`, each row centred with a blank line between rows
#[must_use]
pub fn keyboard_cells(area: Rect) -> Vec<(Rect, Key)> {
    let mut cells = Vec::new();

    for (i, row) in keyboard::rows().into_iter().enumerate() {
        let y = area.y + (i as u16) * 2;
        if y >= area.bottom() {
            break;
        }

        let widths: u16 = row.iter().map(|&key| key_width(key)).sum();
        let total = widths + KEY_GAP * (row.len() as u16).saturating_sub(1);
        let mut x = area.x + area.width.saturating_sub(total) / 2;

        for key in row {
            let width = key_width(key);
            let cell = Rect::new(x, y, width, 1).intersection(area);
            if !cell.is_empty() {
                cells.push((cell, key));
            }
            x = x.saturating_add(width + KEY_GAP);
        }
    }

    cells
}

/// Key under a terminal cell, if any
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<Key> {
    let target = Position::new(column, row);
    keyboard_cells(area)
        .into_iter()
        .find(|(cell, _)| cell.contains(target))
        .map(|(_, key)| key)
}

/// Map a terminal cell inside `canvas` to field coordinates (y grows down)
///
/// Points at the centre of the cell.
#[must_use]
pub fn field_point(canvas: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    if canvas.is_empty() || !canvas.contains(Position::new(column, row)) {
        return None;
    }
    let x = (f64::from(column - canvas.x) + 0.5) / f64::from(canvas.width) * FIELD_WIDTH;
    let y = (f64::from(row - canvas.y) + 0.5) / f64::from(canvas.height) * FIELD_HEIGHT;
    Some((x, y))
}

/// Each dot is two columns wide
pub const DOT_WIDTH: u16 = 2;

/// Dot grid drawn in the top-left of the body block
#[must_use]
pub fn dot_grid(body: Rect) -> Rect {
    let area = inner(body);
    Rect::new(
        area.x,
        area.y,
        area.width.min(GRID_SIZE as u16 * DOT_WIDTH),
        area.height.min(GRID_SIZE as u16),
    )
}

/// Grid cell `(row, col)` under a terminal cell inside `grid`
#[must_use]
pub fn dot_cell(grid: Rect, column: u16, row: u16) -> Option<(usize, usize)> {
    if !grid.contains(Position::new(column, row)) {
        return None;
    }
    let col = usize::from((column - grid.x) / DOT_WIDTH);
    let row = usize::from(row - grid.y);
    (row < GRID_SIZE && col < GRID_SIZE).then_some((row, col))
}

/// Increment button size, borders included
const BUTTON_WIDTH: u16 = 24;
const BUTTON_HEIGHT: u16 = 3;

/// Counter button, centred below the count
#[must_use]
pub fn counter_button(body: Rect) -> Rect {
    let area = inner(body);
    let width = BUTTON_WIDTH.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y + 4, width, BUTTON_HEIGHT).intersection(area)
}

/// Menu entry under a terminal cell, one entry per line of `list`
#[must_use]
pub fn menu_entry(list: Rect, column: u16, row: u16, entries: usize) -> Option<usize> {
    if !list.contains(Position::new(column, row)) {
        return None;
    }
    let index = usize::from(row - list.y);
    (index < entries).then_some(index)
}
